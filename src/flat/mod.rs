//! The flat-buffer representation: one contiguous buffer of interleaved scalars per geometry plus
//! offset arrays marking where each ring or part ends.
//!
//! ```
//! use geotranscode::flat::FlatGeometry;
//! use geotranscode::geometry::{Geometry, Polygon};
//!
//! let polygon = Polygon::from(vec![
//!     vec![[0., 0.], [4., 0.], [4., 4.], [0., 0.]],
//!     vec![[2., 1.], [3., 1.], [3., 2.], [2., 1.]],
//! ]);
//! let flat = FlatGeometry::try_from(&Geometry::from(polygon)).unwrap();
//! let FlatGeometry::Polygon(flat) = flat else { unreachable!() };
//! assert_eq!(flat.ends(), &[8, 16]);
//! ```

mod from_handle;
mod from_tree;
mod geometry;
mod offsets;
mod to_tree;

pub use from_handle::flat_from_handle;
pub use geometry::{
    FlatGeometry, FlatGeometryCollection, FlatLineString, FlatLinearRing, FlatMultiLineString,
    FlatMultiPoint, FlatMultiPolygon, FlatPoint, FlatPolygon,
};
