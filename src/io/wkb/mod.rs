//! Reading and writing ISO-flavored WKB-encoded geometries.
//!
//! Every representation goes through the tree: encoding a flat value or a handle first converts
//! it to a [`Geometry`](crate::geometry::Geometry), and decoding produces one.

mod api;
mod common;
mod reader;
mod writer;

pub use api::{
    from_wkb, handle_from_wkb, handle_to_wkb, to_wkb, to_wkb_with_options, FromWKB, ToWKB,
    WKBOptions,
};
pub use common::{Endianness, WKBGeometryType, WKBType};
pub use reader::{read_wkb_type, MAX_DEPTH};
pub use writer::{geometry_wkb_size, write_geometry_as_wkb};
