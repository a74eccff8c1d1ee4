use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::flat::FlatGeometry;
use crate::geometry::Geometry;
use crate::handle::{to_handle, tree_from_handle, GeometryContext, GeometryHandle};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::read_wkb;
use crate::io::wkb::writer::{geometry_wkb_size, write_geometry_as_wkb};

/// Options for writing WKB.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WKBOptions {
    /// The byte order of every header and value. Little endian by default.
    pub endianness: Endianness,
}

impl WKBOptions {
    pub fn new(endianness: Endianness) -> Self {
        Self { endianness }
    }
}

/// Encode a geometry as little endian ISO WKB.
pub fn to_wkb(geom: &Geometry) -> Result<Vec<u8>> {
    to_wkb_with_options(geom, &WKBOptions::default())
}

/// Encode a geometry as ISO WKB.
pub fn to_wkb_with_options(geom: &Geometry, options: &WKBOptions) -> Result<Vec<u8>> {
    log::debug!(
        "encoding {} as {:?} WKB",
        geom.geometry_type(),
        options.endianness
    );
    let mut buf = Vec::with_capacity(geometry_wkb_size(geom));
    write_geometry_as_wkb(&mut buf, geom, options.endianness)?;
    Ok(buf)
}

/// Decode a WKB buffer. The byte order of each geometry is read from its own header.
pub fn from_wkb(buf: &[u8]) -> Result<Geometry> {
    log::debug!("decoding {} bytes of WKB", buf.len());
    read_wkb(buf).map_err(|err| {
        log::debug!("rejecting WKB input: {err}");
        err
    })
}

/// Encode a handle through the tree representation.
pub fn handle_to_wkb<H: GeometryHandle>(handle: &H, options: &WKBOptions) -> Result<Vec<u8>> {
    to_wkb_with_options(&tree_from_handle(handle)?, options)
}

/// Decode WKB into a new handle allocated in `ctx`.
pub fn handle_from_wkb<'ctx, C: GeometryContext>(
    ctx: &'ctx C,
    buf: &[u8],
) -> Result<C::Handle<'ctx>> {
    to_handle(ctx, &from_wkb(buf)?)
}

/// Serialize a representation to WKB.
pub trait ToWKB {
    fn to_wkb_with_options(&self, options: &WKBOptions) -> Result<Vec<u8>>;

    fn to_wkb(&self) -> Result<Vec<u8>> {
        self.to_wkb_with_options(&WKBOptions::default())
    }
}

/// Parse a representation from WKB.
pub trait FromWKB: Sized {
    fn from_wkb(buf: &[u8]) -> Result<Self>;
}

impl ToWKB for Geometry {
    fn to_wkb_with_options(&self, options: &WKBOptions) -> Result<Vec<u8>> {
        to_wkb_with_options(self, options)
    }
}

impl FromWKB for Geometry {
    fn from_wkb(buf: &[u8]) -> Result<Self> {
        from_wkb(buf)
    }
}

impl ToWKB for FlatGeometry {
    fn to_wkb_with_options(&self, options: &WKBOptions) -> Result<Vec<u8>> {
        to_wkb_with_options(&Geometry::try_from(self)?, options)
    }
}

impl FromWKB for FlatGeometry {
    fn from_wkb(buf: &[u8]) -> Result<Self> {
        FlatGeometry::try_from(&from_wkb(buf)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::GeoTranscodeError;
    use crate::flat::flat_from_handle;
    use crate::handle::ArenaContext;
    use crate::test;

    #[test]
    fn default_is_little_endian() {
        let buf = to_wkb(&test::point::p0().into()).unwrap();
        assert_eq!(buf[0], 1);
        let buf = to_wkb_with_options(
            &test::point::p0().into(),
            &WKBOptions::new(Endianness::BigEndian),
        )
        .unwrap();
        assert_eq!(buf[0], 0);
    }

    #[test]
    fn flat_round_trip() {
        for (name, geom) in test::all_wkb() {
            let flat = FlatGeometry::try_from(&geom).unwrap();
            let buf = flat.to_wkb().unwrap();
            assert_eq!(buf, to_wkb(&geom).unwrap(), "{name}");
            assert_eq!(FlatGeometry::from_wkb(&buf).unwrap(), flat, "{name}");
        }
    }

    #[test]
    fn handle_round_trip() {
        let ctx = ArenaContext::new();
        let options = WKBOptions::new(Endianness::BigEndian);
        for (name, geom) in test::all_wkb() {
            let buf = to_wkb_with_options(&geom, &options).unwrap();
            let handle = handle_from_wkb(&ctx, &buf).unwrap();
            assert_eq!(handle_to_wkb(&handle, &options).unwrap(), buf, "{name}");
            let flat = flat_from_handle(&handle).unwrap();
            assert_eq!(flat.to_wkb_with_options(&options).unwrap(), buf, "{name}");
        }
    }

    #[test]
    fn bare_ring_is_not_encodable() {
        let ring: Geometry = test::linestring::lr0().into();
        assert!(matches!(
            to_wkb(&ring),
            Err(GeoTranscodeError::UnsupportedGeometryKind(_))
        ));
        let flat = FlatGeometry::try_from(&ring).unwrap();
        assert!(matches!(
            flat.to_wkb(),
            Err(GeoTranscodeError::UnsupportedGeometryKind(_))
        ));
    }
}
