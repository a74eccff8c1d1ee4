//! Readers and writers for the WKB wire format, plus interoperability with the `geo` crate.

#[cfg(feature = "geo")]
pub mod geo;
pub mod wkb;
