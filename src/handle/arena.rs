use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::coord::InterleavedCoordBuffer;
use crate::datatypes::{Dimension, GeometryType};
use crate::error::{GeoTranscodeError, Result};
use crate::handle::{GeometryContext, GeometryHandle};

/// A geometry engine that allocates every handle in a bump arena.
///
/// Handles are plain references into the arena and are released together when the context is
/// dropped. `Bump` is not `Sync`, so one context can only be shared within a single thread.
#[derive(Debug, Default)]
pub struct ArenaContext {
    bump: Bump,
}

impl ArenaContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of bytes currently allocated for handles.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    fn alloc<'ctx>(
        &'ctx self,
        kind: GeometryType,
        dim: Dimension,
        coords: &[f64],
        children: Vec<ArenaGeometry<'ctx>>,
    ) -> ArenaGeometry<'ctx> {
        let node = self.bump.alloc(Node {
            kind,
            dim,
            coords: BumpVec::from_iter_in(coords.iter().copied(), &self.bump),
            children: BumpVec::from_iter_in(children, &self.bump),
        });
        ArenaGeometry { node }
    }

    fn alloc_sequence(
        &self,
        kind: GeometryType,
        coords: InterleavedCoordBuffer,
    ) -> ArenaGeometry<'_> {
        self.alloc(kind, coords.dim(), coords.coords(), vec![])
    }
}

#[derive(Debug)]
struct Node<'ctx> {
    kind: GeometryType,
    dim: Dimension,
    coords: BumpVec<'ctx, f64>,
    /// Members of a collection, or the rings of a polygon with the exterior first.
    children: BumpVec<'ctx, ArenaGeometry<'ctx>>,
}

/// A handle into an [`ArenaContext`].
#[derive(Debug, Clone, Copy)]
pub struct ArenaGeometry<'ctx> {
    node: &'ctx Node<'ctx>,
}

impl<'ctx> ArenaGeometry<'ctx> {
    pub fn geometry_type(&self) -> GeometryType {
        self.node.kind
    }

    pub fn dim(&self) -> Dimension {
        self.node.dim
    }

    fn expect_polygon(&self) -> Result<()> {
        match self.node.kind {
            GeometryType::Polygon => Ok(()),
            kind => Err(GeoTranscodeError::Engine(format!(
                "ring access on a {kind} handle"
            ))),
        }
    }

    fn child(&self, n: usize) -> Result<Self> {
        self.node.children.get(n).copied().ok_or_else(|| {
            GeoTranscodeError::Engine(format!(
                "index {n} out of range for {} children",
                self.node.children.len()
            ))
        })
    }
}

impl<'ctx> GeometryHandle for ArenaGeometry<'ctx> {
    fn type_id(&self) -> i32 {
        self.node.kind.type_id()
    }

    fn dimensions(&self) -> Result<usize> {
        Ok(self.node.dim.size())
    }

    fn has_m(&self) -> Result<bool> {
        Ok(self.node.dim.has_m())
    }

    fn coord_seq(&self) -> Result<InterleavedCoordBuffer> {
        match self.node.kind {
            GeometryType::Point | GeometryType::LineString | GeometryType::LinearRing => {
                InterleavedCoordBuffer::try_new(self.node.coords.to_vec(), self.node.dim)
            }
            kind => Err(GeoTranscodeError::Engine(format!(
                "a {kind} handle has no coordinate sequence"
            ))),
        }
    }

    fn num_geometries(&self) -> Result<usize> {
        if self.node.kind.is_collection() {
            Ok(self.node.children.len())
        } else {
            Ok(1)
        }
    }

    fn geometry_n(&self, n: usize) -> Result<Self> {
        match (self.node.kind.is_collection(), n) {
            (true, n) => self.child(n),
            (false, 0) => Ok(*self),
            (false, n) => Err(GeoTranscodeError::Engine(format!(
                "index {n} out of range for a single geometry"
            ))),
        }
    }

    fn exterior_ring(&self) -> Result<Self> {
        self.expect_polygon()?;
        self.child(0)
    }

    fn num_interior_rings(&self) -> Result<usize> {
        self.expect_polygon()?;
        Ok(self.node.children.len().saturating_sub(1))
    }

    fn interior_ring_n(&self, n: usize) -> Result<Self> {
        self.expect_polygon()?;
        self.child(n + 1)
    }
}

impl GeometryContext for ArenaContext {
    type Handle<'ctx> = ArenaGeometry<'ctx>;

    fn new_point(&self, coords: InterleavedCoordBuffer) -> Result<ArenaGeometry<'_>> {
        if coords.len() != 1 {
            return Err(GeoTranscodeError::Engine(format!(
                "a point needs exactly one coordinate, got {}",
                coords.len()
            )));
        }
        Ok(self.alloc_sequence(GeometryType::Point, coords))
    }

    fn new_line_string(&self, coords: InterleavedCoordBuffer) -> Result<ArenaGeometry<'_>> {
        Ok(self.alloc_sequence(GeometryType::LineString, coords))
    }

    fn new_linear_ring(&self, coords: InterleavedCoordBuffer) -> Result<ArenaGeometry<'_>> {
        Ok(self.alloc_sequence(GeometryType::LinearRing, coords))
    }

    fn new_polygon<'ctx>(
        &'ctx self,
        exterior: ArenaGeometry<'ctx>,
        interiors: Vec<ArenaGeometry<'ctx>>,
    ) -> Result<ArenaGeometry<'ctx>> {
        let dim = exterior.dim();
        let mut rings = Vec::with_capacity(interiors.len() + 1);
        rings.push(exterior);
        rings.extend(interiors);
        for ring in &rings {
            if ring.geometry_type() != GeometryType::LinearRing {
                return Err(GeoTranscodeError::Engine(format!(
                    "polygon rings must be LinearRing handles, got {}",
                    ring.geometry_type()
                )));
            }
            dim.expect(ring.dim())?;
        }
        Ok(self.alloc(GeometryType::Polygon, dim, &[], rings))
    }

    fn new_collection<'ctx>(
        &'ctx self,
        kind: GeometryType,
        children: Vec<ArenaGeometry<'ctx>>,
        dim: Dimension,
    ) -> Result<ArenaGeometry<'ctx>> {
        if !kind.is_collection() {
            return Err(GeoTranscodeError::UnsupportedGeometryKind(format!(
                "{kind} is not a collection kind"
            )));
        }
        // Member kinds are left to the reader, like a generic engine collection.
        children
            .iter()
            .try_for_each(|child| dim.expect(child.dim()))?;
        Ok(self.alloc(kind, dim, &[], children))
    }
}
