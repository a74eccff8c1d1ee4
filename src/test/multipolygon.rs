use crate::geometry::MultiPolygon;

pub(crate) fn mp0() -> MultiPolygon {
    vec![
        vec![vec![[0., 0.], [1., 0.], [1., 1.], [0., 0.]]],
        vec![vec![[2., 1.], [3., 1.], [3., 2.], [2., 1.]]],
    ]
    .into()
}

/// Two polygons, the second with a hole, so ring offsets span polygon boundaries.
pub(crate) fn mp1() -> MultiPolygon {
    vec![
        vec![vec![[0., 0.], [1., 0.], [1., 1.], [0., 0.]]],
        vec![
            vec![[0., 0.], [4., 0.], [4., 4.], [0., 0.]],
            vec![[2., 1.], [3., 1.], [3., 2.], [2., 1.]],
        ],
    ]
    .into()
}
