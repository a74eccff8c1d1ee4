use crate::datatypes::{Dimension, GeometryType};
use crate::error::{GeoTranscodeError, Result};
use crate::geometry::*;
use crate::handle::{handle_dim, handle_type, GeometryHandle};

/// Read a handle and all of its descendants into a tree.
///
/// # Errors
///
/// - [`UnsupportedGeometryKind`](GeoTranscodeError::UnsupportedGeometryKind) if the engine
///   reports an unknown kind id
/// - [`KindMismatch`](GeoTranscodeError::KindMismatch) if a ring is not a LinearRing or a member
///   of a multi geometry is not of the member kind
/// - [`UnsupportedDimensionality`](GeoTranscodeError::UnsupportedDimensionality) if a layout is
///   unrecognized or members disagree on their layout
pub fn tree_from_handle<H: GeometryHandle>(handle: &H) -> Result<Geometry> {
    let kind = handle_type(handle)?;
    let dim = handle_dim(handle)?;
    log::trace!("reading {kind} handle with layout {dim}");

    let geometry = match kind {
        GeometryType::Point => {
            let coords = handle.coord_seq()?;
            dim.expect(coords.dim())?;
            Point::try_from_coords(&coords)?.into()
        }
        GeometryType::LineString => {
            let coords = handle.coord_seq()?;
            LineString::try_new(coords.iter().collect(), dim)?.into()
        }
        GeometryType::LinearRing => ring_from_handle(handle, dim)?.into(),
        GeometryType::Polygon => polygon_from_handle(handle, dim)?.into(),
        GeometryType::MultiPoint => {
            MultiPoint::try_new(members_from_handle(handle, Point::try_from)?, dim)?.into()
        }
        GeometryType::MultiLineString => {
            MultiLineString::try_new(members_from_handle(handle, LineString::try_from)?, dim)?
                .into()
        }
        GeometryType::MultiPolygon => {
            MultiPolygon::try_new(members_from_handle(handle, Polygon::try_from)?, dim)?.into()
        }
        GeometryType::GeometryCollection => {
            GeometryCollection::try_new(members_from_handle(handle, Ok)?, dim)?.into()
        }
    };
    Ok(geometry)
}

/// Read every member of a collection handle, converting each resolved tree with `member`.
fn members_from_handle<H: GeometryHandle, T>(
    handle: &H,
    member: impl Fn(Geometry) -> Result<T>,
) -> Result<Vec<T>> {
    (0..handle.num_geometries()?)
        .map(|i| member(tree_from_handle(&handle.geometry_n(i)?)?))
        .collect()
}

fn ring_from_handle<H: GeometryHandle>(handle: &H, dim: Dimension) -> Result<LinearRing> {
    let kind = handle_type(handle)?;
    if kind != GeometryType::LinearRing {
        return Err(GeoTranscodeError::KindMismatch {
            expected: GeometryType::LinearRing,
            found: kind,
        });
    }
    let coords = handle.coord_seq()?;
    LinearRing::try_new(coords.iter().collect(), dim)
}

/// The exterior ring is always kept, even when it is empty.
fn polygon_from_handle<H: GeometryHandle>(handle: &H, dim: Dimension) -> Result<Polygon> {
    let exterior = ring_from_handle(&handle.exterior_ring()?, dim)?;
    let num_interiors = handle.num_interior_rings()?;
    let mut rings = Vec::with_capacity(num_interiors + 1);
    rings.push(exterior);
    for i in 0..num_interiors {
        rings.push(ring_from_handle(&handle.interior_ring_n(i)?, dim)?);
    }
    Polygon::try_new(rings, dim)
}
