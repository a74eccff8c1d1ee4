//! Loss-free conversion of vector geometries between four representations:
//!
//! - the [tree](geometry::Geometry), an owned recursive value per kind
//! - the [flat](flat::FlatGeometry) form, one interleaved coordinate buffer plus end offsets
//! - [handles](handle::GeometryHandle) owned by a geometry engine's context
//! - [WKB](io::wkb), the ISO well-known binary encoding
//!
//! Every conversion preserves kind, coordinate layout, member order and coordinate values
//! bit-for-bit, and rejects inconsistent input with a [`GeoTranscodeError`].
//!
//! ```
//! use geotranscode::flat::FlatGeometry;
//! use geotranscode::geometry::{Geometry, Polygon};
//! use geotranscode::io::wkb::{from_wkb, to_wkb};
//!
//! let polygon = Polygon::from(vec![
//!     vec![[0., 0.], [4., 0.], [4., 4.], [0., 0.]],
//!     vec![[2., 1.], [3., 1.], [3., 2.], [2., 1.]],
//! ]);
//! let geometry = Geometry::from(polygon);
//!
//! let flat = FlatGeometry::try_from(&geometry).unwrap();
//! assert_eq!(Geometry::try_from(&flat).unwrap(), geometry);
//!
//! let buf = to_wkb(&geometry).unwrap();
//! assert_eq!(from_wkb(&buf).unwrap(), geometry);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use dispatch::{AnyGeometry, Target};
pub use error::{GeoTranscodeError, Result};

pub mod coord;
pub mod datatypes;
pub mod dispatch;
pub mod error;
pub mod flat;
pub mod geometry;
pub mod handle;
pub mod io;
#[cfg(test)]
pub(crate) mod test;
