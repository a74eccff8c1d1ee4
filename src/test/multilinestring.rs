use crate::geometry::MultiLineString;

pub(crate) fn ml0() -> MultiLineString {
    vec![vec![[1., 2.], [3., 4.]], vec![[5., 6.], [7., 8.]]].into()
}
