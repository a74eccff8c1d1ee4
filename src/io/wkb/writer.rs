use std::io::Write;

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

use crate::coord::Coord;
use crate::datatypes::{Dimension, GeometryType};
use crate::error::{GeoTranscodeError, Result};
use crate::geometry::*;
use crate::io::wkb::common::{Endianness, WKBByteOrder, WKBType};

/// byteOrder + wkbType
const HEADER_BYTES: usize = 1 + 4;
/// A u32 count of points, rings or members
const COUNT_BYTES: usize = 4;

fn coords_wkb_size(num_coords: usize, dim: Dimension) -> usize {
    num_coords * dim.size() * 8
}

/// The byte length of `geom` encoded as WKB.
pub fn geometry_wkb_size(geom: &Geometry) -> usize {
    match geom {
        Geometry::Point(g) => HEADER_BYTES + coords_wkb_size(1, g.dim()),
        Geometry::LineString(g) => {
            HEADER_BYTES + COUNT_BYTES + coords_wkb_size(g.num_coords(), g.dim())
        }
        Geometry::LinearRing(g) => {
            HEADER_BYTES + COUNT_BYTES + coords_wkb_size(g.num_coords(), g.dim())
        }
        Geometry::Polygon(g) => polygon_wkb_size(g),
        Geometry::MultiPoint(g) => {
            HEADER_BYTES
                + COUNT_BYTES
                + g.num_points() * (HEADER_BYTES + coords_wkb_size(1, g.dim()))
        }
        Geometry::MultiLineString(g) => {
            let mut sum = HEADER_BYTES + COUNT_BYTES;
            for line_string in g.line_strings() {
                sum += HEADER_BYTES
                    + COUNT_BYTES
                    + coords_wkb_size(line_string.num_coords(), line_string.dim());
            }
            sum
        }
        Geometry::MultiPolygon(g) => {
            HEADER_BYTES + COUNT_BYTES + g.polygons().iter().map(polygon_wkb_size).sum::<usize>()
        }
        Geometry::GeometryCollection(g) => {
            HEADER_BYTES
                + COUNT_BYTES
                + g.geometries().iter().map(geometry_wkb_size).sum::<usize>()
        }
    }
}

fn polygon_wkb_size(geom: &Polygon) -> usize {
    let mut sum = HEADER_BYTES + COUNT_BYTES;
    for ring in geom.rings() {
        sum += COUNT_BYTES + coords_wkb_size(ring.num_coords(), ring.dim());
    }
    sum
}

/// Write a geometry to a Writer encoded as ISO WKB, every header in the byte order `endianness`.
///
/// # Errors
///
/// - [`UnsupportedGeometryKind`](GeoTranscodeError::UnsupportedGeometryKind) for a LinearRing,
///   bare or nested in a collection
/// - [`UnsupportedDimensionality`](GeoTranscodeError::UnsupportedDimensionality) if a coordinate
///   or member does not match the layout of its geometry
///
/// The whole geometry is checked before the first byte is written, so these errors leave the
/// writer untouched. An io error from the writer itself may leave a partial encoding behind.
pub fn write_geometry_as_wkb<W: Write>(
    mut writer: W,
    geom: &Geometry,
    endianness: Endianness,
) -> Result<()> {
    check_encodable(geom)?;
    match endianness {
        Endianness::BigEndian => write_geometry::<W, BigEndian>(&mut writer, geom),
        Endianness::LittleEndian => write_geometry::<W, LittleEndian>(&mut writer, geom),
    }
}

/// Check every header, count and coordinate layout of `geom` without writing anything.
fn check_encodable(geom: &Geometry) -> Result<()> {
    WKBType::try_from_geometry_type(geom.geometry_type(), geom.dim())?;
    let dim = geom.dim();
    match geom {
        Geometry::Point(_) => Ok(()),
        Geometry::LineString(g) => check_sequence(g.coords(), dim),
        Geometry::LinearRing(g) => check_sequence(g.coords(), dim),
        Geometry::Polygon(g) => check_polygon(g, dim),
        Geometry::MultiPoint(g) => {
            check_count(g.num_points())?;
            g.points()
                .iter()
                .try_for_each(|point| dim.expect(point.dim()))
        }
        Geometry::MultiLineString(g) => {
            check_count(g.num_line_strings())?;
            g.line_strings().iter().try_for_each(|line_string| {
                dim.expect(line_string.dim())?;
                check_sequence(line_string.coords(), dim)
            })
        }
        Geometry::MultiPolygon(g) => {
            check_count(g.num_polygons())?;
            g.polygons().iter().try_for_each(|polygon| {
                dim.expect(polygon.dim())?;
                check_polygon(polygon, dim)
            })
        }
        Geometry::GeometryCollection(g) => {
            check_count(g.num_geometries())?;
            g.geometries().iter().try_for_each(|member| {
                dim.expect(member.dim())?;
                check_encodable(member)
            })
        }
    }
}

fn check_sequence(coords: &[Coord], dim: Dimension) -> Result<()> {
    check_count(coords.len())?;
    check_coords(coords, dim)
}

fn check_polygon(polygon: &Polygon, dim: Dimension) -> Result<()> {
    check_count(polygon.rings().len())?;
    polygon
        .rings()
        .iter()
        .try_for_each(|ring| check_sequence(ring.coords(), dim))
}

fn check_count(count: usize) -> Result<u32> {
    u32::try_from(count).map_err(|_| {
        GeoTranscodeError::MalformedWKB(format!("count {count} does not fit in a WKB u32"))
    })
}

fn write_geometry<W: Write, B: WKBByteOrder>(writer: &mut W, geom: &Geometry) -> Result<()> {
    write_header::<W, B>(writer, geom)?;

    match geom {
        Geometry::Point(g) => write_coord::<W, B>(writer, &g.coord(), g.dim()),
        Geometry::LineString(g) => write_coords::<W, B>(writer, g.coords(), g.dim()),
        Geometry::LinearRing(_) => Err(GeoTranscodeError::UnsupportedGeometryKind(
            "LinearRing has no WKB type code".to_string(),
        )),
        Geometry::Polygon(g) => write_polygon_body::<W, B>(writer, g),
        Geometry::MultiPoint(g) => {
            write_count::<W, B>(writer, g.num_points())?;
            for point in g.points() {
                write_geometry::<W, B>(writer, &Geometry::Point(*point))?;
            }
            Ok(())
        }
        Geometry::MultiLineString(g) => {
            write_count::<W, B>(writer, g.num_line_strings())?;
            for line_string in g.line_strings() {
                write_header_for::<W, B>(
                    writer,
                    WKBType::try_from_geometry_type(GeometryType::LineString, line_string.dim())?,
                )?;
                write_coords::<W, B>(writer, line_string.coords(), line_string.dim())?;
            }
            Ok(())
        }
        Geometry::MultiPolygon(g) => {
            write_count::<W, B>(writer, g.num_polygons())?;
            for polygon in g.polygons() {
                write_header_for::<W, B>(
                    writer,
                    WKBType::try_from_geometry_type(GeometryType::Polygon, polygon.dim())?,
                )?;
                write_polygon_body::<W, B>(writer, polygon)?;
            }
            Ok(())
        }
        Geometry::GeometryCollection(g) => {
            write_count::<W, B>(writer, g.num_geometries())?;
            for member in g.geometries() {
                write_geometry::<W, B>(writer, member)?;
            }
            Ok(())
        }
    }
}

fn write_header<W: Write, B: WKBByteOrder>(writer: &mut W, geom: &Geometry) -> Result<()> {
    let wkb_type = WKBType::try_from_geometry_type(geom.geometry_type(), geom.dim())?;
    write_header_for::<W, B>(writer, wkb_type)
}

fn write_header_for<W: Write, B: WKBByteOrder>(writer: &mut W, wkb_type: WKBType) -> Result<()> {
    // Byte order
    writer.write_u8(B::ENDIANNESS.into())?;
    // wkbType
    writer.write_u32::<B>(wkb_type.code())?;
    Ok(())
}

fn write_count<W: Write, B: WKBByteOrder>(writer: &mut W, count: usize) -> Result<()> {
    writer.write_u32::<B>(check_count(count)?)?;
    Ok(())
}

fn write_coord<W: Write, B: WKBByteOrder>(
    writer: &mut W,
    coord: &Coord,
    dim: Dimension,
) -> Result<()> {
    dim.expect(coord.dim())?;
    writer.write_f64::<B>(coord.x)?;
    writer.write_f64::<B>(coord.y)?;
    if let Some(z) = coord.z {
        writer.write_f64::<B>(z)?;
    }
    if let Some(m) = coord.m {
        writer.write_f64::<B>(m)?;
    }
    Ok(())
}

fn write_coords<W: Write, B: WKBByteOrder>(
    writer: &mut W,
    coords: &[Coord],
    dim: Dimension,
) -> Result<()> {
    write_count::<W, B>(writer, coords.len())?;
    coords
        .iter()
        .try_for_each(|coord| write_coord::<W, B>(writer, coord, dim))
}

fn write_polygon_body<W: Write, B: WKBByteOrder>(writer: &mut W, geom: &Polygon) -> Result<()> {
    // numRings
    write_count::<W, B>(writer, geom.rings().len())?;
    for ring in geom.rings() {
        write_coords::<W, B>(writer, ring.coords(), geom.dim())?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test;

    fn encode(geom: &Geometry, endianness: Endianness) -> Vec<u8> {
        let mut buf = vec![];
        write_geometry_as_wkb(&mut buf, geom, endianness).unwrap();
        buf
    }

    #[test]
    fn point_bytes() {
        let buf = encode(&test::point::p0().into(), Endianness::LittleEndian);
        let mut expected = vec![1, 1, 0, 0, 0];
        expected.extend_from_slice(&1f64.to_le_bytes());
        expected.extend_from_slice(&2f64.to_le_bytes());
        assert_eq!(buf, expected);

        let buf = encode(&test::point::p0().into(), Endianness::BigEndian);
        let mut expected = vec![0, 0, 0, 0, 1];
        expected.extend_from_slice(&1f64.to_be_bytes());
        expected.extend_from_slice(&2f64.to_be_bytes());
        assert_eq!(buf, expected);
    }

    #[test]
    fn polygon_layout() {
        let buf = encode(&test::polygon::p0().into(), Endianness::LittleEndian);
        // wkbType = 3, numRings = 2, first ring holds 4 points
        assert_eq!(&buf[1..5], &3u32.to_le_bytes());
        assert_eq!(&buf[5..9], &2u32.to_le_bytes());
        assert_eq!(&buf[9..13], &4u32.to_le_bytes());
    }

    #[test]
    fn iso_z_code() {
        let buf = encode(&test::point::p_xyz().into(), Endianness::LittleEndian);
        assert_eq!(&buf[1..5], &1001u32.to_le_bytes());
        assert_eq!(buf.len(), 5 + 24);

        let buf = encode(&test::linestring::ls_xyzm().into(), Endianness::LittleEndian);
        assert_eq!(&buf[1..5], &3002u32.to_le_bytes());
    }

    #[test]
    fn sizes_match_output() {
        for (name, geom) in test::all_wkb() {
            assert_eq!(
                geometry_wkb_size(&geom),
                encode(&geom, Endianness::LittleEndian).len(),
                "{name}"
            );
        }
        let nested = test::geometrycollection::gc_nested().into();
        assert_eq!(
            geometry_wkb_size(&nested),
            encode(&nested, Endianness::BigEndian).len()
        );
    }

    #[test]
    fn linear_ring_is_rejected() {
        let mut buf = vec![];
        let err = write_geometry_as_wkb(
            &mut buf,
            &test::linestring::lr0().into(),
            Endianness::LittleEndian,
        )
        .unwrap_err();
        assert!(matches!(err, GeoTranscodeError::UnsupportedGeometryKind(_)));

        let gc = GeometryCollection::try_from_geometries(vec![test::linestring::lr0().into()])
            .unwrap();
        assert!(matches!(
            write_geometry_as_wkb(&mut buf, &gc.into(), Endianness::LittleEndian),
            Err(GeoTranscodeError::UnsupportedGeometryKind(_))
        ));
    }

    #[test]
    fn rejected_geometry_writes_nothing() {
        let gc = GeometryCollection::try_from_geometries(vec![
            test::point::p0().into(),
            test::linestring::ls0().into(),
            test::linestring::lr0().into(),
        ])
        .unwrap();
        let mut buf = vec![];
        assert!(matches!(
            write_geometry_as_wkb(&mut buf, &gc.into(), Endianness::LittleEndian),
            Err(GeoTranscodeError::UnsupportedGeometryKind(_))
        ));
        assert!(buf.is_empty());
    }
}
