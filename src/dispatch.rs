//! Kind-based routing between representations.
//!
//! Every converter in this crate matches exhaustively over the closed set of kinds, so adding a
//! kind fails to compile until each of them handles it. This module adds the pieces that route a
//! value whose representation is only known at runtime: [`AnyGeometry`] and [`Target`], and the
//! checked narrowing of a [`Geometry`] to one concrete kind.

use crate::datatypes::GeometryType;
use crate::error::{GeoTranscodeError, Result};
use crate::flat::FlatGeometry;
use crate::geometry::*;
use crate::handle::{tree_from_handle, GeometryHandle};
use crate::io::wkb::{from_wkb, read_wkb_type, to_wkb_with_options, Endianness, WKBOptions};

macro_rules! impl_try_from_geometry {
    ($geometry_type:ident) => {
        impl TryFrom<Geometry> for $geometry_type {
            type Error = GeoTranscodeError;

            /// Narrow a geometry to this kind.
            ///
            /// # Errors
            ///
            /// - [`KindMismatch`](GeoTranscodeError::KindMismatch) if the geometry is of any
            ///   other kind
            fn try_from(value: Geometry) -> Result<Self> {
                match value {
                    Geometry::$geometry_type(g) => Ok(g),
                    other => Err(GeoTranscodeError::KindMismatch {
                        expected: GeometryType::$geometry_type,
                        found: other.geometry_type(),
                    }),
                }
            }
        }
    };
}

impl_try_from_geometry!(Point);
impl_try_from_geometry!(LineString);
impl_try_from_geometry!(LinearRing);
impl_try_from_geometry!(Polygon);
impl_try_from_geometry!(MultiPoint);
impl_try_from_geometry!(MultiLineString);
impl_try_from_geometry!(MultiPolygon);
impl_try_from_geometry!(GeometryCollection);

/// A geometry in any of the four representations.
///
/// `H` is the handle type of the engine in use, for example
/// [`ArenaGeometry`](crate::handle::ArenaGeometry).
#[derive(Debug, Clone, PartialEq)]
pub enum AnyGeometry<H> {
    Tree(Geometry),
    Flat(FlatGeometry),
    Handle(H),
    Wkb(Vec<u8>),
}

/// The representation to convert an [`AnyGeometry`] into.
///
/// Handles are not a target here because creating them needs a context. Convert to the tree and
/// call [`to_handle`](crate::handle::to_handle) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Tree,
    Flat,
    Wkb(Endianness),
}

impl<H: GeometryHandle> AnyGeometry<H> {
    /// The kind of this geometry, read without converting it.
    ///
    /// WKB is inspected only up to its first header.
    pub fn geometry_type(&self) -> Result<GeometryType> {
        match self {
            AnyGeometry::Tree(g) => Ok(g.geometry_type()),
            AnyGeometry::Flat(g) => Ok(g.geometry_type()),
            AnyGeometry::Handle(h) => GeometryType::try_from_type_id(h.type_id()),
            AnyGeometry::Wkb(buf) => Ok(read_wkb_type(buf)?.geometry_type.into()),
        }
    }

    /// Convert to the tree representation.
    pub fn to_tree(&self) -> Result<Geometry> {
        match self {
            AnyGeometry::Tree(g) => Ok(g.clone()),
            AnyGeometry::Flat(g) => Geometry::try_from(g),
            AnyGeometry::Handle(h) => tree_from_handle(h),
            AnyGeometry::Wkb(buf) => from_wkb(buf),
        }
    }

    /// Convert to `target`, going through the tree.
    pub fn transcode(&self, target: Target) -> Result<AnyGeometry<H>> {
        log::debug!("transcoding {} to {target:?}", self.representation());
        let tree = self.to_tree()?;
        let transcoded = match target {
            Target::Tree => AnyGeometry::Tree(tree),
            Target::Flat => AnyGeometry::Flat(FlatGeometry::try_from(&tree)?),
            Target::Wkb(endianness) => {
                AnyGeometry::Wkb(to_wkb_with_options(&tree, &WKBOptions::new(endianness))?)
            }
        };
        Ok(transcoded)
    }

    fn representation(&self) -> &'static str {
        match self {
            AnyGeometry::Tree(_) => "tree",
            AnyGeometry::Flat(_) => "flat",
            AnyGeometry::Handle(_) => "handle",
            AnyGeometry::Wkb(_) => "wkb",
        }
    }
}

impl<H> From<Geometry> for AnyGeometry<H> {
    fn from(value: Geometry) -> Self {
        AnyGeometry::Tree(value)
    }
}

impl<H> From<FlatGeometry> for AnyGeometry<H> {
    fn from(value: FlatGeometry) -> Self {
        AnyGeometry::Flat(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::InterleavedCoordBuffer;
    use crate::datatypes::Dimension;
    use crate::flat::{FlatLineString, FlatPolygon};
    use crate::handle::{to_handle, ArenaContext, ArenaGeometry, GeometryContext};
    use crate::io::wkb::to_wkb;
    use crate::test;

    type Any<'ctx> = AnyGeometry<ArenaGeometry<'ctx>>;

    #[test]
    fn narrowing() {
        let geometry: Geometry = test::point::p0().into();
        assert_eq!(Point::try_from(geometry.clone()).unwrap(), test::point::p0());
        assert!(matches!(
            Polygon::try_from(geometry),
            Err(GeoTranscodeError::KindMismatch {
                expected: GeometryType::Polygon,
                found: GeometryType::Point
            })
        ));
    }

    #[test]
    fn every_pair_of_representations() {
        let ctx = ArenaContext::new();
        for (name, geometry) in test::all_wkb() {
            let sources: Vec<Any> = vec![
                geometry.clone().into(),
                FlatGeometry::try_from(&geometry).unwrap().into(),
                AnyGeometry::Handle(to_handle(&ctx, &geometry).unwrap()),
                AnyGeometry::Wkb(to_wkb(&geometry).unwrap()),
            ];
            for source in &sources {
                assert_eq!(
                    source.geometry_type().unwrap(),
                    geometry.geometry_type(),
                    "{name}"
                );
                for target in [
                    Target::Tree,
                    Target::Flat,
                    Target::Wkb(Endianness::LittleEndian),
                    Target::Wkb(Endianness::BigEndian),
                ] {
                    let transcoded = source.transcode(target).unwrap();
                    assert_eq!(transcoded.to_tree().unwrap(), geometry, "{name} {target:?}");
                }
            }
        }
    }

    #[test]
    fn independently_built_shapes_agree() {
        // The same polygon with one hole, built separately in each representation.
        let tree = Geometry::from(test::polygon::p0());

        let flat = FlatPolygon::try_new(
            InterleavedCoordBuffer::try_new(
                vec![0., 0., 4., 0., 4., 4., 0., 0., 2., 1., 3., 1., 3., 2., 2., 1.],
                Dimension::XY,
            )
            .unwrap(),
            vec![8, 16],
        )
        .unwrap();

        let ctx = ArenaContext::new();
        let ring = |coords: Vec<f64>| {
            ctx.new_linear_ring(InterleavedCoordBuffer::try_new(coords, Dimension::XY).unwrap())
                .unwrap()
        };
        let exterior = ring(vec![0., 0., 4., 0., 4., 4., 0., 0.]);
        let hole = ring(vec![2., 1., 3., 1., 3., 2., 2., 1.]);
        let handle = ctx.new_polygon(exterior, vec![hole]).unwrap();

        let flat: Any = FlatGeometry::from(flat).into();
        let handle: Any = AnyGeometry::Handle(handle);
        assert_eq!(flat.to_tree().unwrap(), tree);
        assert_eq!(handle.to_tree().unwrap(), tree);
        let (AnyGeometry::Flat(from_handle), AnyGeometry::Flat(from_flat)) = (
            handle.transcode(Target::Flat).unwrap(),
            flat.transcode(Target::Flat).unwrap(),
        ) else {
            panic!("expected flat geometries");
        };
        assert_eq!(from_handle, from_flat);
    }

    #[test]
    fn empty_line_string_through_every_representation() {
        let ctx = ArenaContext::new();
        let empty = Geometry::from(LineString::empty(Dimension::XY));
        let source: Any = empty.clone().into();

        let AnyGeometry::Flat(FlatGeometry::LineString(flat)) =
            source.transcode(Target::Flat).unwrap()
        else {
            panic!("expected a flat line string");
        };
        assert!(flat.coords().coords().is_empty());
        assert_eq!(
            AnyGeometry::<ArenaGeometry>::Flat(FlatLineString::new(flat.into_inner()).into())
                .to_tree()
                .unwrap(),
            empty
        );

        let handle: Any = AnyGeometry::Handle(to_handle(&ctx, &empty).unwrap());
        assert_eq!(handle.to_tree().unwrap(), empty);
    }

    #[test]
    fn failures_surface() {
        let truncated: Any = AnyGeometry::Wkb(vec![1, 1, 0, 0, 0]);
        assert!(matches!(
            truncated.to_tree(),
            Err(GeoTranscodeError::MalformedWKB(_))
        ));

        let unknown = AnyGeometry::Handle(crate::handle::mock::MockHandle::leaf(99, 2, vec![]));
        assert!(matches!(
            unknown.geometry_type(),
            Err(GeoTranscodeError::UnsupportedGeometryKind(_))
        ));
        assert!(matches!(
            unknown.transcode(Target::Flat),
            Err(GeoTranscodeError::UnsupportedGeometryKind(_))
        ));
    }
}
