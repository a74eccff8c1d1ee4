use crate::coord::Coord;
use crate::datatypes::Dimension;
use crate::geometry::{LinearRing, Polygon};

/// A square with one triangular hole.
pub(crate) fn p0() -> Polygon {
    vec![
        vec![[0., 0.], [4., 0.], [4., 4.], [0., 0.]],
        vec![[2., 1.], [3., 1.], [3., 2.], [2., 1.]],
    ]
    .into()
}

pub(crate) fn p1() -> Polygon {
    vec![vec![[0., 0.], [1., 0.], [1., 1.], [0., 0.]]].into()
}

pub(crate) fn p_xyz() -> Polygon {
    let ring = LinearRing::try_new(
        vec![
            Coord::new_xyz(0., 0., 1.),
            Coord::new_xyz(1., 0., 2.),
            Coord::new_xyz(1., 1., 3.),
            Coord::new_xyz(0., 0., 1.),
        ],
        Dimension::XYZ,
    )
    .unwrap();
    Polygon::try_new(vec![ring], Dimension::XYZ).unwrap()
}
