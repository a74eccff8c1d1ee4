use serde::{Deserialize, Serialize};

use crate::coord::InterleavedCoordBuffer;
use crate::datatypes::{Dimension, GeometryType};
use crate::error::{GeoTranscodeError, Result};
use crate::flat::offsets::{check_buffer, check_ends, check_endss};

/// A point stored as a flat buffer holding exactly one coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatPoint {
    coords: InterleavedCoordBuffer,
}

impl FlatPoint {
    /// # Errors
    ///
    /// - if the buffer does not hold exactly one coordinate
    pub fn try_new(coords: InterleavedCoordBuffer) -> Result<Self> {
        let point = Self { coords };
        point.validate()?;
        Ok(point)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        check_buffer(&self.coords)?;
        if self.coords.len() != 1 {
            return Err(GeoTranscodeError::InvalidOffsets(format!(
                "a point holds exactly one coordinate, found {}",
                self.coords.len()
            )));
        }
        Ok(())
    }

    pub fn coords(&self) -> &InterleavedCoordBuffer {
        &self.coords
    }

    pub fn dim(&self) -> Dimension {
        self.coords.dim()
    }
}

macro_rules! impl_flat_sequence {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            coords: InterleavedCoordBuffer,
        }

        impl $name {
            pub fn new(coords: InterleavedCoordBuffer) -> Self {
                Self { coords }
            }

            pub(crate) fn validate(&self) -> Result<()> {
                check_buffer(&self.coords)
            }

            pub fn coords(&self) -> &InterleavedCoordBuffer {
                &self.coords
            }

            pub fn dim(&self) -> Dimension {
                self.coords.dim()
            }

            pub fn into_inner(self) -> InterleavedCoordBuffer {
                self.coords
            }
        }
    };
}

impl_flat_sequence!(
    /// A line string stored as one span of coordinates.
    FlatLineString
);
impl_flat_sequence!(
    /// A linear ring stored as one span of coordinates.
    FlatLinearRing
);
impl_flat_sequence!(
    /// A multi point stored as one span of coordinates, one coordinate per point.
    FlatMultiPoint
);

macro_rules! impl_flat_with_ends {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            coords: InterleavedCoordBuffer,
            ends: Vec<usize>,
        }

        impl $name {
            /// Create a new geometry from a coordinate buffer and the scalar offset at which each
            /// part ends.
            ///
            /// # Errors
            ///
            /// - if any offset is not aligned to the stride
            /// - if the offsets decrease
            /// - if the last offset does not equal the number of scalars in the buffer
            pub fn try_new(coords: InterleavedCoordBuffer, ends: Vec<usize>) -> Result<Self> {
                let geom = Self { coords, ends };
                geom.validate()?;
                Ok(geom)
            }

            pub(crate) fn validate(&self) -> Result<()> {
                check_ends(&self.coords, &self.ends)
            }

            pub fn coords(&self) -> &InterleavedCoordBuffer {
                &self.coords
            }

            pub fn ends(&self) -> &[usize] {
                &self.ends
            }

            pub fn dim(&self) -> Dimension {
                self.coords.dim()
            }

            pub fn into_inner(self) -> (InterleavedCoordBuffer, Vec<usize>) {
                (self.coords, self.ends)
            }
        }
    };
}

impl_flat_with_ends!(
    /// A polygon stored as one buffer of all ring coordinates plus one end offset per ring.
    FlatPolygon
);
impl_flat_with_ends!(
    /// A multi line string stored as one buffer plus one end offset per line string.
    FlatMultiLineString
);

/// A multi polygon stored as one buffer plus, for each polygon, the end offsets of its rings.
///
/// All offsets are absolute into the shared buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatMultiPolygon {
    coords: InterleavedCoordBuffer,
    endss: Vec<Vec<usize>>,
}

impl FlatMultiPolygon {
    /// # Errors
    ///
    /// - if any offset is not aligned to the stride
    /// - if the offsets, read across all polygons in order, decrease
    /// - if the last offset does not equal the number of scalars in the buffer
    pub fn try_new(coords: InterleavedCoordBuffer, endss: Vec<Vec<usize>>) -> Result<Self> {
        let geom = Self { coords, endss };
        geom.validate()?;
        Ok(geom)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        check_endss(&self.coords, &self.endss)
    }

    pub fn coords(&self) -> &InterleavedCoordBuffer {
        &self.coords
    }

    pub fn endss(&self) -> &[Vec<usize>] {
        &self.endss
    }

    pub fn dim(&self) -> Dimension {
        self.coords.dim()
    }

    pub fn into_inner(self) -> (InterleavedCoordBuffer, Vec<Vec<usize>>) {
        (self.coords, self.endss)
    }
}

/// A collection of flat geometries sharing one layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatGeometryCollection {
    geometries: Vec<FlatGeometry>,
    dim: Dimension,
}

impl FlatGeometryCollection {
    /// # Errors
    ///
    /// - if any member has a layout other than `dim`
    pub fn try_new(geometries: Vec<FlatGeometry>, dim: Dimension) -> Result<Self> {
        geometries
            .iter()
            .try_for_each(|geometry| dim.expect(geometry.dim()))?;
        Ok(Self { geometries, dim })
    }

    pub fn geometries(&self) -> &[FlatGeometry] {
        &self.geometries
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    pub fn into_inner(self) -> Vec<FlatGeometry> {
        self.geometries
    }
}

/// A geometry of any kind in flat-buffer form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FlatGeometry {
    Point(FlatPoint),
    LineString(FlatLineString),
    LinearRing(FlatLinearRing),
    Polygon(FlatPolygon),
    MultiPoint(FlatMultiPoint),
    MultiLineString(FlatMultiLineString),
    MultiPolygon(FlatMultiPolygon),
    GeometryCollection(FlatGeometryCollection),
}

impl FlatGeometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            FlatGeometry::Point(_) => GeometryType::Point,
            FlatGeometry::LineString(_) => GeometryType::LineString,
            FlatGeometry::LinearRing(_) => GeometryType::LinearRing,
            FlatGeometry::Polygon(_) => GeometryType::Polygon,
            FlatGeometry::MultiPoint(_) => GeometryType::MultiPoint,
            FlatGeometry::MultiLineString(_) => GeometryType::MultiLineString,
            FlatGeometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            FlatGeometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    pub fn dim(&self) -> Dimension {
        match self {
            FlatGeometry::Point(g) => g.dim(),
            FlatGeometry::LineString(g) => g.dim(),
            FlatGeometry::LinearRing(g) => g.dim(),
            FlatGeometry::Polygon(g) => g.dim(),
            FlatGeometry::MultiPoint(g) => g.dim(),
            FlatGeometry::MultiLineString(g) => g.dim(),
            FlatGeometry::MultiPolygon(g) => g.dim(),
            FlatGeometry::GeometryCollection(g) => g.dim(),
        }
    }

    /// The coordinate buffer of this geometry, if it is not a collection.
    pub fn coords(&self) -> Option<&InterleavedCoordBuffer> {
        match self {
            FlatGeometry::Point(g) => Some(g.coords()),
            FlatGeometry::LineString(g) => Some(g.coords()),
            FlatGeometry::LinearRing(g) => Some(g.coords()),
            FlatGeometry::Polygon(g) => Some(g.coords()),
            FlatGeometry::MultiPoint(g) => Some(g.coords()),
            FlatGeometry::MultiLineString(g) => Some(g.coords()),
            FlatGeometry::MultiPolygon(g) => Some(g.coords()),
            FlatGeometry::GeometryCollection(_) => None,
        }
    }
}

macro_rules! impl_into_flat_geometry {
    ($flat_type:ident, $variant:ident) => {
        impl From<$flat_type> for FlatGeometry {
            fn from(value: $flat_type) -> Self {
                FlatGeometry::$variant(value)
            }
        }
    };
}

impl_into_flat_geometry!(FlatPoint, Point);
impl_into_flat_geometry!(FlatLineString, LineString);
impl_into_flat_geometry!(FlatLinearRing, LinearRing);
impl_into_flat_geometry!(FlatPolygon, Polygon);
impl_into_flat_geometry!(FlatMultiPoint, MultiPoint);
impl_into_flat_geometry!(FlatMultiLineString, MultiLineString);
impl_into_flat_geometry!(FlatMultiPolygon, MultiPolygon);
impl_into_flat_geometry!(FlatGeometryCollection, GeometryCollection);
