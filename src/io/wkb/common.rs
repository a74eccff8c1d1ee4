use byteorder::{BigEndian, ByteOrder, LittleEndian};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::datatypes::{Dimension, GeometryType};
use crate::error::{GeoTranscodeError, Result};

/// EWKB flag bits carried in the high bits of the type code.
const EWKB_Z: u32 = 0x8000_0000;
const EWKB_M: u32 = 0x4000_0000;
const EWKB_SRID: u32 = 0x2000_0000;

/// The byte order of a WKB buffer, stored in the first byte of every geometry header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Endianness {
    BigEndian,
    #[default]
    LittleEndian,
}

impl TryFrom<u8> for Endianness {
    type Error = GeoTranscodeError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            other => Err(GeoTranscodeError::MalformedWKB(format!(
                "unexpected byte order flag {other}"
            ))),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        match value {
            Endianness::BigEndian => 0,
            Endianness::LittleEndian => 1,
        }
    }
}

/// Ties a [`ByteOrder`] to the flag it is written with.
pub(crate) trait WKBByteOrder: ByteOrder {
    const ENDIANNESS: Endianness;
}

impl WKBByteOrder for BigEndian {
    const ENDIANNESS: Endianness = Endianness::BigEndian;
}

impl WKBByteOrder for LittleEndian {
    const ENDIANNESS: Endianness = Endianness::LittleEndian;
}

/// The seven geometry kinds that have a WKB type code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WKBGeometryType {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

impl From<WKBGeometryType> for GeometryType {
    fn from(value: WKBGeometryType) -> Self {
        match value {
            WKBGeometryType::Point => GeometryType::Point,
            WKBGeometryType::LineString => GeometryType::LineString,
            WKBGeometryType::Polygon => GeometryType::Polygon,
            WKBGeometryType::MultiPoint => GeometryType::MultiPoint,
            WKBGeometryType::MultiLineString => GeometryType::MultiLineString,
            WKBGeometryType::MultiPolygon => GeometryType::MultiPolygon,
            WKBGeometryType::GeometryCollection => GeometryType::GeometryCollection,
        }
    }
}

impl TryFrom<GeometryType> for WKBGeometryType {
    type Error = GeoTranscodeError;

    fn try_from(value: GeometryType) -> Result<Self> {
        match value {
            GeometryType::Point => Ok(WKBGeometryType::Point),
            GeometryType::LineString => Ok(WKBGeometryType::LineString),
            GeometryType::LinearRing => Err(GeoTranscodeError::UnsupportedGeometryKind(
                "LinearRing has no WKB type code".to_string(),
            )),
            GeometryType::Polygon => Ok(WKBGeometryType::Polygon),
            GeometryType::MultiPoint => Ok(WKBGeometryType::MultiPoint),
            GeometryType::MultiLineString => Ok(WKBGeometryType::MultiLineString),
            GeometryType::MultiPolygon => Ok(WKBGeometryType::MultiPolygon),
            GeometryType::GeometryCollection => Ok(WKBGeometryType::GeometryCollection),
        }
    }
}

/// A full WKB type: the geometry kind plus its coordinate layout.
///
/// Written as ISO codes (`1000` added for Z, `2000` for M, `3000` for ZM). EWKB Z and M flag bits
/// are accepted on read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WKBType {
    pub geometry_type: WKBGeometryType,
    pub dim: Dimension,
}

impl WKBType {
    pub fn new(geometry_type: WKBGeometryType, dim: Dimension) -> Self {
        Self { geometry_type, dim }
    }

    /// The WKB type of a tree geometry kind.
    ///
    /// # Errors
    ///
    /// - if the kind has no WKB encoding
    pub fn try_from_geometry_type(geometry_type: GeometryType, dim: Dimension) -> Result<Self> {
        Ok(Self::new(geometry_type.try_into()?, dim))
    }

    /// Parse a raw type code.
    pub fn from_code(code: u32) -> Result<Self> {
        if code & EWKB_SRID != 0 {
            return Err(GeoTranscodeError::MalformedWKB(format!(
                "type code {code:#x} carries an SRID, which is not supported"
            )));
        }

        let (base, dim) = if code & (EWKB_Z | EWKB_M) != 0 {
            let base = code & !(EWKB_Z | EWKB_M);
            let dim = Dimension::from_flags(code & EWKB_Z != 0, code & EWKB_M != 0);
            (base, dim)
        } else {
            let dim = match code / 1000 {
                0 => Dimension::XY,
                1 => Dimension::XYZ,
                2 => Dimension::XYM,
                3 => Dimension::XYZM,
                _ => {
                    return Err(GeoTranscodeError::MalformedWKB(format!(
                        "unrecognized geometry type code {code}"
                    )))
                }
            };
            (code % 1000, dim)
        };

        let geometry_type = WKBGeometryType::try_from_primitive(base).map_err(|_| {
            GeoTranscodeError::MalformedWKB(format!("unrecognized geometry type code {code}"))
        })?;
        Ok(Self { geometry_type, dim })
    }

    /// The ISO type code.
    pub fn code(&self) -> u32 {
        let offset = match self.dim {
            Dimension::XY => 0,
            Dimension::XYZ => 1000,
            Dimension::XYM => 2000,
            Dimension::XYZM => 3000,
        };
        u32::from(self.geometry_type) + offset
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn iso_codes() {
        let wkb_type = WKBType::from_code(1003).unwrap();
        assert_eq!(wkb_type.geometry_type, WKBGeometryType::Polygon);
        assert_eq!(wkb_type.dim, Dimension::XYZ);
        assert_eq!(wkb_type.code(), 1003);

        assert_eq!(WKBType::from_code(3007).unwrap().dim, Dimension::XYZM);
        assert_eq!(
            WKBType::new(WKBGeometryType::Point, Dimension::XYM).code(),
            2001
        );
    }

    #[test]
    fn ewkb_flags() {
        let wkb_type = WKBType::from_code(0x8000_0002).unwrap();
        assert_eq!(wkb_type.geometry_type, WKBGeometryType::LineString);
        assert_eq!(wkb_type.dim, Dimension::XYZ);

        assert!(matches!(
            WKBType::from_code(0x2000_0001),
            Err(GeoTranscodeError::MalformedWKB(_))
        ));
    }

    #[test]
    fn unknown_codes() {
        for code in [0, 8, 17, 1008, 4001] {
            assert!(
                matches!(
                    WKBType::from_code(code),
                    Err(GeoTranscodeError::MalformedWKB(_))
                ),
                "{code}"
            );
        }
    }

    #[test]
    fn byte_order_flag() {
        assert_eq!(Endianness::try_from(0).unwrap(), Endianness::BigEndian);
        assert_eq!(Endianness::try_from(1).unwrap(), Endianness::LittleEndian);
        assert!(matches!(
            Endianness::try_from(2),
            Err(GeoTranscodeError::MalformedWKB(_))
        ));
    }

    #[test]
    fn linear_ring_has_no_code() {
        assert!(matches!(
            WKBType::try_from_geometry_type(GeometryType::LinearRing, Dimension::XY),
            Err(GeoTranscodeError::UnsupportedGeometryKind(_))
        ));
    }
}
