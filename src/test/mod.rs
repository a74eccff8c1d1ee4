pub(crate) mod geometrycollection;
pub(crate) mod linestring;
pub(crate) mod multilinestring;
pub(crate) mod multipoint;
pub(crate) mod multipolygon;
pub(crate) mod polygon;

use crate::geometry::Geometry;

/// One geometry of every kind, keyed by name.
pub(crate) fn all() -> Vec<(&'static str, Geometry)> {
    vec![
        ("Point", point::p0().into()),
        ("LineString", linestring::ls0().into()),
        ("LinearRing", linestring::lr0().into()),
        ("Polygon", polygon::p0().into()),
        ("MultiPoint", multipoint::mp0().into()),
        ("MultiLineString", multilinestring::ml0().into()),
        ("MultiPolygon", multipolygon::mp0().into()),
        ("GeometryCollection", geometrycollection::gc0().into()),
    ]
}

/// Every geometry of [`all`] that has a WKB encoding.
pub(crate) fn all_wkb() -> Vec<(&'static str, Geometry)> {
    all()
        .into_iter()
        .filter(|(name, _)| *name != "LinearRing")
        .collect()
}
