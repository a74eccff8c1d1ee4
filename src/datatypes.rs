//! Shared vocabulary of the geometry model: coordinate layouts and geometry kinds.

use std::fmt::Display;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::{GeoTranscodeError, Result};

/// The coordinate layout of a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dimension {
    /// Two-dimensional.
    #[default]
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Map a dimensionality reported by an external engine to a layout.
    ///
    /// Engines only report a count of ordinates, so a count of three is read as XYZ and a count of
    /// four as XYZM.
    pub fn try_from_size(size: usize) -> Result<Self> {
        match size {
            2 => Ok(Dimension::XY),
            3 => Ok(Dimension::XYZ),
            4 => Ok(Dimension::XYZM),
            _ => Err(GeoTranscodeError::UnsupportedDimensionality(size)),
        }
    }

    /// Build a layout from the presence of the Z and M ordinates.
    pub fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Dimension::XY,
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (true, true) => Dimension::XYZM,
        }
    }

    /// Returns the number of scalars per coordinate (the stride).
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    /// Whether coordinates in this layout carry a Z ordinate.
    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    /// Whether coordinates in this layout carry a measure.
    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }

    /// Fail with [`GeoTranscodeError::UnsupportedDimensionality`] unless `other` equals `self`.
    pub(crate) fn expect(&self, other: Dimension) -> Result<()> {
        if *self == other {
            Ok(())
        } else {
            Err(GeoTranscodeError::UnsupportedDimensionality(other.size()))
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}

/// The closed set of geometry kinds.
///
/// The integer values follow the GEOS type ids, which is how handle engines report the kind of a
/// handle (see [`GeometryHandle::type_id`](crate::handle::GeometryHandle::type_id)).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    TryFromPrimitive,
    IntoPrimitive,
)]
#[repr(i32)]
pub enum GeometryType {
    /// A single coordinate.
    Point = 0,
    /// An ordered sequence of coordinates.
    LineString = 1,
    /// A ring of a polygon.
    LinearRing = 2,
    /// An exterior ring followed by zero or more holes.
    Polygon = 3,
    /// A sequence of points.
    MultiPoint = 4,
    /// A sequence of line strings.
    MultiLineString = 5,
    /// A sequence of polygons.
    MultiPolygon = 6,
    /// A heterogeneous sequence of geometries.
    GeometryCollection = 7,
}

impl GeometryType {
    /// Resolve a raw type id reported by a handle engine.
    pub fn try_from_type_id(type_id: i32) -> Result<Self> {
        Self::try_from_primitive(type_id).map_err(|_| {
            log::debug!("rejecting unknown geometry type id {type_id}");
            GeoTranscodeError::UnsupportedGeometryKind(format!("type id {type_id}"))
        })
    }

    /// The raw type id of this kind.
    pub fn type_id(&self) -> i32 {
        (*self).into()
    }

    /// The kind every member of this multi geometry must resolve to.
    ///
    /// Returns `None` for kinds without a homogeneous member kind.
    pub fn member_type(&self) -> Option<GeometryType> {
        match self {
            GeometryType::MultiPoint => Some(GeometryType::Point),
            GeometryType::MultiLineString => Some(GeometryType::LineString),
            GeometryType::MultiPolygon => Some(GeometryType::Polygon),
            GeometryType::Point
            | GeometryType::LineString
            | GeometryType::LinearRing
            | GeometryType::Polygon
            | GeometryType::GeometryCollection => None,
        }
    }

    /// Whether this kind is built from a list of child handles.
    pub fn is_collection(&self) -> bool {
        match self {
            GeometryType::MultiPoint
            | GeometryType::MultiLineString
            | GeometryType::MultiPolygon
            | GeometryType::GeometryCollection => true,
            GeometryType::Point
            | GeometryType::LineString
            | GeometryType::LinearRing
            | GeometryType::Polygon => false,
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::LinearRing => "LinearRing",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dimension_from_size() {
        assert_eq!(Dimension::try_from_size(2).unwrap(), Dimension::XY);
        assert_eq!(Dimension::try_from_size(3).unwrap(), Dimension::XYZ);
        assert_eq!(Dimension::try_from_size(4).unwrap(), Dimension::XYZM);

        for size in [0, 1, 5] {
            assert!(matches!(
                Dimension::try_from_size(size),
                Err(GeoTranscodeError::UnsupportedDimensionality(n)) if n == size
            ));
        }
    }

    #[test]
    fn dimension_flags() {
        for dim in [
            Dimension::XY,
            Dimension::XYZ,
            Dimension::XYM,
            Dimension::XYZM,
        ] {
            assert_eq!(Dimension::from_flags(dim.has_z(), dim.has_m()), dim);
        }
    }

    #[test]
    fn type_ids() {
        assert_eq!(
            GeometryType::try_from_type_id(2).unwrap(),
            GeometryType::LinearRing
        );
        assert_eq!(GeometryType::GeometryCollection.type_id(), 7);
        assert!(matches!(
            GeometryType::try_from_type_id(8),
            Err(GeoTranscodeError::UnsupportedGeometryKind(_))
        ));
        assert!(matches!(
            GeometryType::try_from_type_id(-1),
            Err(GeoTranscodeError::UnsupportedGeometryKind(_))
        ));
    }
}
