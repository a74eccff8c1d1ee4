use crate::datatypes::Dimension;
use crate::geometry::{Geometry, GeometryCollection, LineString, Point, Polygon};

/// A Point, a LineString and a Polygon, in that order.
pub(crate) fn gc0() -> GeometryCollection {
    GeometryCollection::try_new(
        vec![
            Point::new(1., 2.).into(),
            LineString::from(vec![[1., 2.], [3., 4.]]).into(),
            Polygon::from(vec![vec![[0., 0.], [1., 0.], [1., 1.], [0., 0.]]]).into(),
        ],
        Dimension::XY,
    )
    .unwrap()
}

/// A collection nesting another collection and an empty member.
pub(crate) fn gc_nested() -> GeometryCollection {
    let members: Vec<Geometry> = vec![
        gc0().into(),
        LineString::empty(Dimension::XY).into(),
        super::multipolygon::mp1().into(),
    ];
    GeometryCollection::try_new(members, Dimension::XY).unwrap()
}
