use crate::coord::Coord;
use crate::datatypes::Dimension;
use crate::geometry::{LineString, LinearRing};

pub(crate) fn ls0() -> LineString {
    vec![[1., 2.], [3., 4.]].into()
}

pub(crate) fn ls_xyzm() -> LineString {
    LineString::try_new(
        vec![
            Coord::new_xyzm(1., 2., 3., 4.),
            Coord::new_xyzm(5., 6., 7., 8.),
        ],
        Dimension::XYZM,
    )
    .unwrap()
}

pub(crate) fn lr0() -> LinearRing {
    vec![[1., 4.], [5., 2.], [3., 6.], [1., 4.]].into()
}
