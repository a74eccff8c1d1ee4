use std::io::Cursor;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use crate::coord::Coord;
use crate::datatypes::{Dimension, GeometryType};
use crate::error::{GeoTranscodeError, Result};
use crate::geometry::*;
use crate::io::wkb::common::{Endianness, WKBGeometryType, WKBType};

/// The deepest collection nesting [`read_wkb`] accepts. The outermost geometry is at depth 0.
pub const MAX_DEPTH: usize = 128;

/// Decode one WKB geometry that spans all of `buf`.
///
/// # Errors
///
/// - [`MalformedWKB`](GeoTranscodeError::MalformedWKB) on truncated input, an unknown byte order
///   flag or type code, a member whose kind or layout differs from what its parent declares,
///   nesting deeper than [`MAX_DEPTH`], or bytes left over after the geometry
pub fn read_wkb(buf: &[u8]) -> Result<Geometry> {
    let mut reader = WKBReader {
        cursor: Cursor::new(buf),
    };
    let geometry = reader.read_geometry(0)?;
    if reader.remaining() != 0 {
        return Err(GeoTranscodeError::MalformedWKB(format!(
            "{} trailing bytes after geometry",
            reader.remaining()
        )));
    }
    Ok(geometry)
}

/// Read only the header of the outermost geometry in `buf`.
pub fn read_wkb_type(buf: &[u8]) -> Result<WKBType> {
    let mut reader = WKBReader {
        cursor: Cursor::new(buf),
    };
    Ok(reader.read_header()?.1)
}

fn truncated(err: std::io::Error) -> GeoTranscodeError {
    GeoTranscodeError::MalformedWKB(format!("unexpected end of input: {err}"))
}

struct WKBReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> WKBReader<'a> {
    fn remaining(&self) -> usize {
        let len = self.cursor.get_ref().len() as u64;
        len.saturating_sub(self.cursor.position()) as usize
    }

    fn read_u32(&mut self, byte_order: Endianness) -> Result<u32> {
        match byte_order {
            Endianness::BigEndian => self.cursor.read_u32::<BigEndian>(),
            Endianness::LittleEndian => self.cursor.read_u32::<LittleEndian>(),
        }
        .map_err(truncated)
    }

    fn read_f64(&mut self, byte_order: Endianness) -> Result<f64> {
        match byte_order {
            Endianness::BigEndian => self.cursor.read_f64::<BigEndian>(),
            Endianness::LittleEndian => self.cursor.read_f64::<LittleEndian>(),
        }
        .map_err(truncated)
    }

    /// Read a count of items that each need at least `min_item_bytes` of input.
    ///
    /// Counts the remaining input cannot hold are rejected before anything is allocated.
    fn read_count(&mut self, byte_order: Endianness, min_item_bytes: usize) -> Result<usize> {
        let count = self.read_u32(byte_order)? as usize;
        if count.saturating_mul(min_item_bytes) > self.remaining() {
            return Err(GeoTranscodeError::MalformedWKB(format!(
                "count {count} exceeds the {} remaining bytes",
                self.remaining()
            )));
        }
        Ok(count)
    }

    fn read_header(&mut self) -> Result<(Endianness, WKBType)> {
        let byte_order = Endianness::try_from(self.cursor.read_u8().map_err(truncated)?)?;
        let wkb_type = WKBType::from_code(self.read_u32(byte_order)?)?;
        Ok((byte_order, wkb_type))
    }

    fn read_geometry(&mut self, depth: usize) -> Result<Geometry> {
        if depth > MAX_DEPTH {
            return Err(GeoTranscodeError::MalformedWKB(format!(
                "nesting deeper than {MAX_DEPTH}"
            )));
        }
        let (byte_order, wkb_type) = self.read_header()?;
        let dim = wkb_type.dim;
        log::trace!("reading WKB {:?} with layout {dim}", wkb_type.geometry_type);

        let geometry = match wkb_type.geometry_type {
            WKBGeometryType::Point => Point::from(self.read_coord(byte_order, dim)?).into(),
            WKBGeometryType::LineString => {
                LineString::try_new(self.read_coords(byte_order, dim)?, dim)?.into()
            }
            WKBGeometryType::Polygon => self.read_polygon_body(byte_order, dim)?.into(),
            WKBGeometryType::MultiPoint => {
                let num_points = self.read_count(byte_order, 5 + dim.size() * 8)?;
                let mut points = Vec::with_capacity(num_points);
                for _ in 0..num_points {
                    points.push(self.read_member(
                        depth,
                        GeometryType::Point,
                        dim,
                        |geometry| match geometry {
                            Geometry::Point(point) => Some(point),
                            _ => None,
                        },
                    )?);
                }
                MultiPoint::try_new(points, dim)?.into()
            }
            WKBGeometryType::MultiLineString => {
                let num_line_strings = self.read_count(byte_order, 9)?;
                let mut line_strings = Vec::with_capacity(num_line_strings);
                for _ in 0..num_line_strings {
                    line_strings.push(self.read_member(
                        depth,
                        GeometryType::LineString,
                        dim,
                        |geometry| match geometry {
                            Geometry::LineString(line_string) => Some(line_string),
                            _ => None,
                        },
                    )?);
                }
                MultiLineString::try_new(line_strings, dim)?.into()
            }
            WKBGeometryType::MultiPolygon => {
                let num_polygons = self.read_count(byte_order, 9)?;
                let mut polygons = Vec::with_capacity(num_polygons);
                for _ in 0..num_polygons {
                    polygons.push(self.read_member(
                        depth,
                        GeometryType::Polygon,
                        dim,
                        |geometry| match geometry {
                            Geometry::Polygon(polygon) => Some(polygon),
                            _ => None,
                        },
                    )?);
                }
                MultiPolygon::try_new(polygons, dim)?.into()
            }
            WKBGeometryType::GeometryCollection => {
                let num_geometries = self.read_count(byte_order, 9)?;
                let mut geometries = Vec::with_capacity(num_geometries);
                for _ in 0..num_geometries {
                    geometries.push(self.read_member(
                        depth,
                        GeometryType::GeometryCollection,
                        dim,
                        Some,
                    )?);
                }
                GeometryCollection::try_new(geometries, dim)?.into()
            }
        };
        Ok(geometry)
    }

    /// Read a member one level below `parent_depth`, which must have the layout `dim` and be
    /// accepted by `extract`.
    fn read_member<T>(
        &mut self,
        parent_depth: usize,
        expected: GeometryType,
        dim: Dimension,
        extract: impl FnOnce(Geometry) -> Option<T>,
    ) -> Result<T> {
        let member = self.read_geometry(parent_depth + 1)?;
        if member.dim() != dim {
            return Err(GeoTranscodeError::MalformedWKB(format!(
                "member with layout {} inside a {dim} geometry",
                member.dim()
            )));
        }
        let found = member.geometry_type();
        extract(member).ok_or_else(|| {
            GeoTranscodeError::MalformedWKB(format!("{found} member where {expected} is required"))
        })
    }

    fn read_coord(&mut self, byte_order: Endianness, dim: Dimension) -> Result<Coord> {
        let x = self.read_f64(byte_order)?;
        let y = self.read_f64(byte_order)?;
        let coord = match dim {
            Dimension::XY => Coord::new(x, y),
            Dimension::XYZ => Coord::new_xyz(x, y, self.read_f64(byte_order)?),
            Dimension::XYM => Coord::new_xym(x, y, self.read_f64(byte_order)?),
            Dimension::XYZM => {
                let z = self.read_f64(byte_order)?;
                let m = self.read_f64(byte_order)?;
                Coord::new_xyzm(x, y, z, m)
            }
        };
        Ok(coord)
    }

    fn read_coords(&mut self, byte_order: Endianness, dim: Dimension) -> Result<Vec<Coord>> {
        let num_coords = self.read_count(byte_order, dim.size() * 8)?;
        (0..num_coords)
            .map(|_| self.read_coord(byte_order, dim))
            .collect()
    }

    fn read_polygon_body(&mut self, byte_order: Endianness, dim: Dimension) -> Result<Polygon> {
        let num_rings = self.read_count(byte_order, 4)?;
        let mut rings = Vec::with_capacity(num_rings);
        for _ in 0..num_rings {
            rings.push(LinearRing::try_new(self.read_coords(byte_order, dim)?, dim)?);
        }
        Polygon::try_new(rings, dim)
    }
}
