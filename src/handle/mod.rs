//! The handle representation: geometries that live inside an external engine and are reachable
//! only through its construction and inspection API.
//!
//! An engine is described by two traits. [`GeometryContext`] allocates new handles and owns them;
//! [`GeometryHandle`] inspects an existing handle. Handles borrow their context, so the borrow
//! checker rejects any handle that would outlive the context which created it.
//!
//! [`ArenaContext`] is an in-process engine that stores handles in a bump arena.

mod arena;
mod export;
mod import;

pub use arena::{ArenaContext, ArenaGeometry};
pub use export::to_handle;
pub use import::tree_from_handle;

use crate::coord::InterleavedCoordBuffer;
use crate::datatypes::{Dimension, GeometryType};
use crate::error::Result;

/// Inspection API of a geometry handle.
///
/// The accessors follow GEOS semantics: `num_geometries` of a non-collection is 1 and
/// `geometry_n(0)` of a non-collection is the handle itself.
pub trait GeometryHandle: Sized {
    /// The raw kind id of this handle. See [`GeometryType`] for the numbering.
    fn type_id(&self) -> i32;

    /// The number of ordinates per coordinate.
    fn dimensions(&self) -> Result<usize>;

    /// Whether the coordinates of this handle carry a measure.
    ///
    /// Engines that cannot store measures keep the default.
    fn has_m(&self) -> Result<bool> {
        Ok(false)
    }

    /// A copy of the coordinates of a Point, LineString or LinearRing handle.
    fn coord_seq(&self) -> Result<InterleavedCoordBuffer>;

    fn num_geometries(&self) -> Result<usize>;

    fn geometry_n(&self, n: usize) -> Result<Self>;

    fn exterior_ring(&self) -> Result<Self>;

    fn num_interior_rings(&self) -> Result<usize>;

    fn interior_ring_n(&self, n: usize) -> Result<Self>;
}

/// Construction API of a geometry engine.
///
/// The context owns every handle it creates. All calls against one context must be serialized by
/// the caller.
pub trait GeometryContext {
    type Handle<'ctx>: GeometryHandle
    where
        Self: 'ctx;

    fn new_point(&self, coords: InterleavedCoordBuffer) -> Result<Self::Handle<'_>>;

    fn new_line_string(&self, coords: InterleavedCoordBuffer) -> Result<Self::Handle<'_>>;

    fn new_linear_ring(&self, coords: InterleavedCoordBuffer) -> Result<Self::Handle<'_>>;

    /// Create a polygon from ring handles made by [`new_linear_ring`](Self::new_linear_ring).
    ///
    /// An empty polygon has an empty exterior and no interiors.
    fn new_polygon<'ctx>(
        &'ctx self,
        exterior: Self::Handle<'ctx>,
        interiors: Vec<Self::Handle<'ctx>>,
    ) -> Result<Self::Handle<'ctx>>;

    /// Create a multi geometry or a geometry collection from already built members.
    ///
    /// `dim` is the layout of the collection when `children` is empty.
    fn new_collection<'ctx>(
        &'ctx self,
        kind: GeometryType,
        children: Vec<Self::Handle<'ctx>>,
        dim: Dimension,
    ) -> Result<Self::Handle<'ctx>>;
}

/// Resolve the kind of a handle.
pub(crate) fn handle_type<H: GeometryHandle>(handle: &H) -> Result<GeometryType> {
    GeometryType::try_from_type_id(handle.type_id())
}

/// Resolve the coordinate layout of a handle from its reported dimensionality.
pub(crate) fn handle_dim<H: GeometryHandle>(handle: &H) -> Result<Dimension> {
    let dim = Dimension::try_from_size(handle.dimensions()?)?;
    match (dim, handle.has_m()?) {
        (Dimension::XYZ, true) => Ok(Dimension::XYM),
        (dim, _) => Ok(dim),
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! A scripted handle for exercising engine reports that no real context produces.

    use super::*;
    use crate::error::GeoTranscodeError;

    #[derive(Debug, Clone)]
    pub(crate) struct MockHandle {
        pub type_id: i32,
        pub dimensions: usize,
        pub coords: Vec<f64>,
        pub children: Vec<MockHandle>,
    }

    impl MockHandle {
        pub(crate) fn leaf(type_id: i32, dimensions: usize, coords: Vec<f64>) -> Self {
            Self {
                type_id,
                dimensions,
                coords,
                children: vec![],
            }
        }

        pub(crate) fn parent(type_id: i32, children: Vec<MockHandle>) -> Self {
            Self {
                type_id,
                dimensions: 2,
                coords: vec![],
                children,
            }
        }

        fn child(&self, n: usize) -> Result<Self> {
            self.children
                .get(n)
                .cloned()
                .ok_or_else(|| GeoTranscodeError::Engine(format!("no child {n}")))
        }
    }

    impl GeometryHandle for MockHandle {
        fn type_id(&self) -> i32 {
            self.type_id
        }

        fn dimensions(&self) -> Result<usize> {
            Ok(self.dimensions)
        }

        fn coord_seq(&self) -> Result<InterleavedCoordBuffer> {
            InterleavedCoordBuffer::try_from_raw(self.coords.clone(), self.dimensions)
        }

        fn num_geometries(&self) -> Result<usize> {
            Ok(self.children.len())
        }

        fn geometry_n(&self, n: usize) -> Result<Self> {
            self.child(n)
        }

        fn exterior_ring(&self) -> Result<Self> {
            self.child(0)
        }

        fn num_interior_rings(&self) -> Result<usize> {
            Ok(self.children.len().saturating_sub(1))
        }

        fn interior_ring_n(&self, n: usize) -> Result<Self> {
            self.child(n + 1)
        }
    }
}
