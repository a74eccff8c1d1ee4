use crate::coord::InterleavedCoordBuffer;
use crate::datatypes::GeometryType;
use crate::error::{GeoTranscodeError, Result};
use crate::flat::geometry::*;
use crate::handle::{handle_dim, handle_type, GeometryHandle};

/// Read a handle straight into the flat representation without building a tree.
///
/// Coordinate sequences are copied into one shared buffer per geometry. Every member must have
/// the layout of its parent.
pub fn flat_from_handle<H: GeometryHandle>(handle: &H) -> Result<FlatGeometry> {
    let kind = handle_type(handle)?;
    let dim = handle_dim(handle)?;
    log::trace!("flattening {kind} handle with layout {dim}");

    let flat = match kind {
        GeometryType::Point => {
            let coords = handle.coord_seq()?;
            dim.expect(coords.dim())?;
            FlatPoint::try_new(coords)?.into()
        }
        GeometryType::LineString => FlatLineString::new(sequence(handle, kind)?).into(),
        GeometryType::LinearRing => FlatLinearRing::new(sequence(handle, kind)?).into(),
        GeometryType::Polygon => {
            let mut buffer = InterleavedCoordBuffer::empty(dim);
            let ends = append_polygon(handle, &mut buffer)?;
            FlatPolygon::try_new(buffer, ends)?.into()
        }
        GeometryType::MultiPoint => {
            let mut buffer = InterleavedCoordBuffer::empty(dim);
            for member in members(handle, GeometryType::Point)? {
                buffer.extend_from(&member.coord_seq()?)?;
            }
            FlatMultiPoint::new(buffer).into()
        }
        GeometryType::MultiLineString => {
            let mut buffer = InterleavedCoordBuffer::empty(dim);
            let mut ends = vec![];
            for member in members(handle, GeometryType::LineString)? {
                buffer.extend_from(&member.coord_seq()?)?;
                ends.push(buffer.coords().len());
            }
            FlatMultiLineString::try_new(buffer, ends)?.into()
        }
        GeometryType::MultiPolygon => {
            let mut buffer = InterleavedCoordBuffer::empty(dim);
            let endss = members(handle, GeometryType::Polygon)?
                .iter()
                .map(|member| append_polygon(member, &mut buffer))
                .collect::<Result<Vec<_>>>()?;
            FlatMultiPolygon::try_new(buffer, endss)?.into()
        }
        GeometryType::GeometryCollection => {
            let geometries = (0..handle.num_geometries()?)
                .map(|i| flat_from_handle(&handle.geometry_n(i)?))
                .collect::<Result<Vec<_>>>()?;
            FlatGeometryCollection::try_new(geometries, dim)?.into()
        }
    };
    Ok(flat)
}

/// The coordinate sequence of a LineString or LinearRing handle, checked against its layout.
fn sequence<H: GeometryHandle>(handle: &H, kind: GeometryType) -> Result<InterleavedCoordBuffer> {
    expect_kind(handle, kind)?;
    let coords = handle.coord_seq()?;
    handle_dim(handle)?.expect(coords.dim())?;
    Ok(coords)
}

fn expect_kind<H: GeometryHandle>(handle: &H, expected: GeometryType) -> Result<()> {
    let found = handle_type(handle)?;
    if found != expected {
        return Err(GeoTranscodeError::KindMismatch { expected, found });
    }
    Ok(())
}

/// The members of a multi geometry handle, each checked to be of kind `expected`.
fn members<H: GeometryHandle>(handle: &H, expected: GeometryType) -> Result<Vec<H>> {
    (0..handle.num_geometries()?)
        .map(|i| {
            let member = handle.geometry_n(i)?;
            expect_kind(&member, expected)?;
            Ok(member)
        })
        .collect()
}

/// Append the rings of a polygon handle to `buffer`, returning absolute ring end offsets.
fn append_polygon<H: GeometryHandle>(
    handle: &H,
    buffer: &mut InterleavedCoordBuffer,
) -> Result<Vec<usize>> {
    let exterior = sequence(&handle.exterior_ring()?, GeometryType::LinearRing)?;
    let num_interiors = handle.num_interior_rings()?;
    let mut ends = Vec::with_capacity(num_interiors + 1);
    buffer.extend_from(&exterior)?;
    ends.push(buffer.coords().len());
    for i in 0..num_interiors {
        let ring = sequence(&handle.interior_ring_n(i)?, GeometryType::LinearRing)?;
        buffer.extend_from(&ring)?;
        ends.push(buffer.coords().len());
    }
    Ok(ends)
}
