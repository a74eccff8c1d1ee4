use crate::coord::InterleavedCoordBuffer;
use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::geometry::*;
use crate::handle::GeometryContext;

/// Build a handle for `geometry` in `ctx`, bottom-up.
///
/// Multi geometries become engine collections tagged with their kind.
pub fn to_handle<'ctx, C: GeometryContext>(
    ctx: &'ctx C,
    geometry: &Geometry,
) -> Result<C::Handle<'ctx>> {
    match geometry {
        Geometry::Point(g) => point_to_handle(ctx, g),
        Geometry::LineString(g) => {
            ctx.new_line_string(InterleavedCoordBuffer::from_coords(g.coords(), g.dim())?)
        }
        Geometry::LinearRing(g) => ring_to_handle(ctx, g),
        Geometry::Polygon(g) => polygon_to_handle(ctx, g),
        Geometry::MultiPoint(g) => {
            let children = g
                .points()
                .iter()
                .map(|point| point_to_handle(ctx, point))
                .collect::<Result<Vec<_>>>()?;
            ctx.new_collection(GeometryType::MultiPoint, children, g.dim())
        }
        Geometry::MultiLineString(g) => {
            let children = g
                .line_strings()
                .iter()
                .map(|ls| {
                    ctx.new_line_string(InterleavedCoordBuffer::from_coords(
                        ls.coords(),
                        ls.dim(),
                    )?)
                })
                .collect::<Result<Vec<_>>>()?;
            ctx.new_collection(GeometryType::MultiLineString, children, g.dim())
        }
        Geometry::MultiPolygon(g) => {
            let children = g
                .polygons()
                .iter()
                .map(|polygon| polygon_to_handle(ctx, polygon))
                .collect::<Result<Vec<_>>>()?;
            ctx.new_collection(GeometryType::MultiPolygon, children, g.dim())
        }
        Geometry::GeometryCollection(g) => {
            let children = g
                .geometries()
                .iter()
                .map(|child| to_handle(ctx, child))
                .collect::<Result<Vec<_>>>()?;
            ctx.new_collection(GeometryType::GeometryCollection, children, g.dim())
        }
    }
}

fn point_to_handle<'ctx, C: GeometryContext>(
    ctx: &'ctx C,
    point: &Point,
) -> Result<C::Handle<'ctx>> {
    ctx.new_point(InterleavedCoordBuffer::from_coords(
        &[point.coord()],
        point.dim(),
    )?)
}

fn ring_to_handle<'ctx, C: GeometryContext>(
    ctx: &'ctx C,
    ring: &LinearRing,
) -> Result<C::Handle<'ctx>> {
    ctx.new_linear_ring(InterleavedCoordBuffer::from_coords(
        ring.coords(),
        ring.dim(),
    )?)
}

fn polygon_to_handle<'ctx, C: GeometryContext>(
    ctx: &'ctx C,
    polygon: &Polygon,
) -> Result<C::Handle<'ctx>> {
    let exterior = match polygon.exterior() {
        Some(ring) => ring_to_handle(ctx, ring)?,
        None => ctx.new_linear_ring(InterleavedCoordBuffer::empty(polygon.dim()))?,
    };
    let interiors = polygon
        .interiors()
        .iter()
        .map(|ring| ring_to_handle(ctx, ring))
        .collect::<Result<Vec<_>>>()?;
    ctx.new_polygon(exterior, interiors)
}
