//! The tree representation: each geometry is a tagged node owning its children and coordinates.
//!
//! Tree values are the pivot of this crate. Every other representation converts to and from
//! [`Geometry`].

use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::datatypes::{Dimension, GeometryType};
use crate::error::Result;

mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub use geometrycollection::GeometryCollection;
pub use linestring::{LineString, LinearRing};
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;

/// A geometry of any of the eight supported kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    LinearRing(LinearRing),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// The kind of this geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::LinearRing(_) => GeometryType::LinearRing,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// The coordinate layout of this geometry and all of its descendants.
    pub fn dim(&self) -> Dimension {
        match self {
            Geometry::Point(g) => g.dim(),
            Geometry::LineString(g) => g.dim(),
            Geometry::LinearRing(g) => g.dim(),
            Geometry::Polygon(g) => g.dim(),
            Geometry::MultiPoint(g) => g.dim(),
            Geometry::MultiLineString(g) => g.dim(),
            Geometry::MultiPolygon(g) => g.dim(),
            Geometry::GeometryCollection(g) => g.dim(),
        }
    }

    /// Whether this geometry holds no coordinates at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(_) => false,
            Geometry::LineString(g) => g.is_empty(),
            Geometry::LinearRing(g) => g.is_empty(),
            Geometry::Polygon(g) => g.rings().iter().all(|ring| ring.is_empty()),
            Geometry::MultiPoint(g) => g.is_empty(),
            Geometry::MultiLineString(g) => g.line_strings().iter().all(|ls| ls.is_empty()),
            Geometry::MultiPolygon(g) => g
                .polygons()
                .iter()
                .flat_map(|polygon| polygon.rings())
                .all(|ring| ring.is_empty()),
            Geometry::GeometryCollection(g) => g.geometries().iter().all(|g| g.is_empty()),
        }
    }
}

macro_rules! impl_into_geometry {
    ($geometry_type:ident) => {
        impl From<$geometry_type> for Geometry {
            fn from(value: $geometry_type) -> Self {
                Geometry::$geometry_type(value)
            }
        }
    };
}

impl_into_geometry!(Point);
impl_into_geometry!(LineString);
impl_into_geometry!(LinearRing);
impl_into_geometry!(Polygon);
impl_into_geometry!(MultiPoint);
impl_into_geometry!(MultiLineString);
impl_into_geometry!(MultiPolygon);
impl_into_geometry!(GeometryCollection);

/// Check that every coordinate has the layout `dim`.
pub(crate) fn check_coords(coords: &[Coord], dim: Dimension) -> Result<()> {
    coords.iter().try_for_each(|coord| dim.expect(coord.dim()))
}

/// Check that every child has the layout `dim`.
pub(crate) fn check_dims(mut dims: impl Iterator<Item = Dimension>, dim: Dimension) -> Result<()> {
    dims.try_for_each(|child| dim.expect(child))
}

/// The layout of the first child, or XY without children.
pub(crate) fn first_dim(mut dims: impl Iterator<Item = Dimension>) -> Dimension {
    dims.next().unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{geometrycollection, polygon};

    #[test]
    fn geometry_types() {
        let gc = geometrycollection::gc0();
        let kinds: Vec<_> = gc.geometries().iter().map(|g| g.geometry_type()).collect();
        assert_eq!(
            kinds,
            vec![
                GeometryType::Point,
                GeometryType::LineString,
                GeometryType::Polygon
            ]
        );
        assert_eq!(
            Geometry::from(gc).geometry_type(),
            GeometryType::GeometryCollection
        );
    }

    #[test]
    fn emptiness() {
        assert!(Geometry::from(LineString::empty(Dimension::XY)).is_empty());
        assert!(Geometry::from(Polygon::empty(Dimension::XYZ)).is_empty());
        assert!(!Geometry::from(polygon::p0()).is_empty());
        assert!(!Geometry::from(Point::new(0., 0.)).is_empty());
    }
}
