//! Convert between tree geometries and [`geo`] scalars.
//!
//! `geo` only stores XY coordinates, so converting a Z or M geometry into it fails. The reverse
//! direction maps the `geo`-only kinds onto the closed kind set: a [`geo::Line`] becomes a
//! LineString, and a [`geo::Rect`] or [`geo::Triangle`] becomes a Polygon.

mod scalar;

pub use scalar::{
    coord_to_geo, geometry_collection_to_geo, geometry_to_geo, line_string_to_geo,
    linear_ring_to_geo, multi_line_string_to_geo, multi_point_to_geo, multi_polygon_to_geo,
    point_to_geo, polygon_to_geo,
};

use crate::coord::Coord;
use crate::datatypes::Dimension;
use crate::error::GeoTranscodeError;
use crate::geometry::*;

impl TryFrom<&Geometry> for geo::Geometry {
    type Error = GeoTranscodeError;

    fn try_from(value: &Geometry) -> Result<Self, Self::Error> {
        geometry_to_geo(value)
    }
}

impl From<&geo::Geometry> for Geometry {
    fn from(value: &geo::Geometry) -> Self {
        match value {
            geo::Geometry::Point(g) => Point::from(g).into(),
            geo::Geometry::Line(g) => {
                LineString::from(&geo::LineString::new(vec![g.start, g.end])).into()
            }
            geo::Geometry::LineString(g) => LineString::from(g).into(),
            geo::Geometry::Polygon(g) => Polygon::from(g).into(),
            geo::Geometry::MultiPoint(g) => MultiPoint::from(g).into(),
            geo::Geometry::MultiLineString(g) => MultiLineString::from(g).into(),
            geo::Geometry::MultiPolygon(g) => MultiPolygon::from(g).into(),
            geo::Geometry::GeometryCollection(g) => GeometryCollection::from(g).into(),
            geo::Geometry::Rect(g) => Polygon::from(&g.to_polygon()).into(),
            geo::Geometry::Triangle(g) => Polygon::from(&g.to_polygon()).into(),
        }
    }
}

impl From<geo::Coord> for Coord {
    fn from(value: geo::Coord) -> Self {
        Coord::new(value.x, value.y)
    }
}

impl From<&geo::Point> for Point {
    fn from(value: &geo::Point) -> Self {
        Point::from(Coord::from(value.0))
    }
}

impl From<&geo::LineString> for LineString {
    fn from(value: &geo::LineString) -> Self {
        value.0.iter().map(|c| [c.x, c.y]).collect::<Vec<_>>().into()
    }
}

/// The rings of a `geo` polygon as nested XY arrays.
///
/// An empty exterior without interiors yields no rings at all.
fn polygon_rings(polygon: &geo::Polygon) -> Vec<Vec<[f64; 2]>> {
    if polygon.exterior().0.is_empty() && polygon.interiors().is_empty() {
        return vec![];
    }
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(|ring| ring.0.iter().map(|c| [c.x, c.y]).collect())
        .collect()
}

impl From<&geo::Polygon> for Polygon {
    fn from(value: &geo::Polygon) -> Self {
        polygon_rings(value).into()
    }
}

impl From<&geo::MultiPoint> for MultiPoint {
    fn from(value: &geo::MultiPoint) -> Self {
        value.0.iter().map(|p| [p.x(), p.y()]).collect::<Vec<_>>().into()
    }
}

impl From<&geo::MultiLineString> for MultiLineString {
    fn from(value: &geo::MultiLineString) -> Self {
        value
            .0
            .iter()
            .map(|ls| ls.0.iter().map(|c| [c.x, c.y]).collect())
            .collect::<Vec<Vec<_>>>()
            .into()
    }
}

impl From<&geo::MultiPolygon> for MultiPolygon {
    fn from(value: &geo::MultiPolygon) -> Self {
        value.0.iter().map(polygon_rings).collect::<Vec<_>>().into()
    }
}

impl From<&geo::GeometryCollection> for GeometryCollection {
    fn from(value: &geo::GeometryCollection) -> Self {
        // Every member converted from `geo` is XY.
        GeometryCollection::new_unchecked(
            value.0.iter().map(Geometry::from).collect(),
            Dimension::XY,
        )
    }
}
