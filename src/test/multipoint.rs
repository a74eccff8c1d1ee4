use crate::geometry::MultiPoint;

pub(crate) fn mp0() -> MultiPoint {
    vec![[1., 2.], [3., 4.]].into()
}
