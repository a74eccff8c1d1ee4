use crate::coord::InterleavedCoordBuffer;
use crate::datatypes::Dimension;
use crate::error::{GeoTranscodeError, Result};
use crate::flat::geometry::*;
use crate::geometry::*;

/// Slice one ring per offset, advancing `start` past each ring.
///
/// `start` is shared by the caller across polygons, so it is never reset here.
fn rings_from_ends(
    coords: &InterleavedCoordBuffer,
    ends: &[usize],
    start: &mut usize,
    dim: Dimension,
) -> Result<Polygon> {
    let rings = ends
        .iter()
        .map(|&end| {
            let ring = LinearRing::try_new(coords.coords_in(*start, end), dim);
            *start = end;
            ring
        })
        .collect::<Result<Vec<_>>>()?;
    Polygon::try_new(rings, dim)
}

impl TryFrom<&FlatPoint> for Point {
    type Error = GeoTranscodeError;

    fn try_from(value: &FlatPoint) -> Result<Self> {
        value.validate()?;
        Point::try_from_coords(value.coords())
    }
}

impl TryFrom<&FlatLineString> for LineString {
    type Error = GeoTranscodeError;

    fn try_from(value: &FlatLineString) -> Result<Self> {
        value.validate()?;
        LineString::try_new(value.coords().iter().collect(), value.dim())
    }
}

impl TryFrom<&FlatLinearRing> for LinearRing {
    type Error = GeoTranscodeError;

    fn try_from(value: &FlatLinearRing) -> Result<Self> {
        value.validate()?;
        LinearRing::try_new(value.coords().iter().collect(), value.dim())
    }
}

impl TryFrom<&FlatPolygon> for Polygon {
    type Error = GeoTranscodeError;

    fn try_from(value: &FlatPolygon) -> Result<Self> {
        value.validate()?;
        rings_from_ends(value.coords(), value.ends(), &mut 0, value.dim())
    }
}

impl TryFrom<&FlatMultiPoint> for MultiPoint {
    type Error = GeoTranscodeError;

    fn try_from(value: &FlatMultiPoint) -> Result<Self> {
        value.validate()?;
        MultiPoint::try_new(
            value.coords().iter().map(Point::from).collect(),
            value.dim(),
        )
    }
}

impl TryFrom<&FlatMultiLineString> for MultiLineString {
    type Error = GeoTranscodeError;

    fn try_from(value: &FlatMultiLineString) -> Result<Self> {
        value.validate()?;
        let dim = value.dim();
        let mut start = 0;
        let line_strings = value
            .ends()
            .iter()
            .map(|&end| {
                let line_string = LineString::try_new(value.coords().coords_in(start, end), dim);
                start = end;
                line_string
            })
            .collect::<Result<Vec<_>>>()?;
        MultiLineString::try_new(line_strings, dim)
    }
}

impl TryFrom<&FlatMultiPolygon> for MultiPolygon {
    type Error = GeoTranscodeError;

    fn try_from(value: &FlatMultiPolygon) -> Result<Self> {
        value.validate()?;
        let dim = value.dim();
        let mut start = 0;
        let polygons = value
            .endss()
            .iter()
            .map(|ends| rings_from_ends(value.coords(), ends, &mut start, dim))
            .collect::<Result<Vec<_>>>()?;
        MultiPolygon::try_new(polygons, dim)
    }
}

impl TryFrom<&FlatGeometryCollection> for GeometryCollection {
    type Error = GeoTranscodeError;

    fn try_from(value: &FlatGeometryCollection) -> Result<Self> {
        let geometries = value
            .geometries()
            .iter()
            .map(Geometry::try_from)
            .collect::<Result<Vec<_>>>()?;
        GeometryCollection::try_new(geometries, value.dim())
    }
}

impl TryFrom<&FlatGeometry> for Geometry {
    type Error = GeoTranscodeError;

    fn try_from(value: &FlatGeometry) -> Result<Self> {
        let geometry = match value {
            FlatGeometry::Point(g) => Point::try_from(g)?.into(),
            FlatGeometry::LineString(g) => LineString::try_from(g)?.into(),
            FlatGeometry::LinearRing(g) => LinearRing::try_from(g)?.into(),
            FlatGeometry::Polygon(g) => Polygon::try_from(g)?.into(),
            FlatGeometry::MultiPoint(g) => MultiPoint::try_from(g)?.into(),
            FlatGeometry::MultiLineString(g) => MultiLineString::try_from(g)?.into(),
            FlatGeometry::MultiPolygon(g) => MultiPolygon::try_from(g)?.into(),
            FlatGeometry::GeometryCollection(g) => GeometryCollection::try_from(g)?.into(),
        };
        Ok(geometry)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Coord;
    use crate::test;

    fn buffer(coords: Vec<f64>) -> InterleavedCoordBuffer {
        InterleavedCoordBuffer::try_new(coords, Dimension::XY).unwrap()
    }

    #[test]
    fn round_trip_every_kind() {
        for (name, geometry) in test::all() {
            let flat = FlatGeometry::try_from(&geometry).unwrap();
            let tree = Geometry::try_from(&flat).unwrap();
            assert_eq!(tree, geometry, "{name}");
            assert_eq!(FlatGeometry::try_from(&tree).unwrap(), flat, "{name}");
        }

        let nested = Geometry::from(test::geometrycollection::gc_nested());
        let flat = FlatGeometry::try_from(&nested).unwrap();
        assert_eq!(Geometry::try_from(&flat).unwrap(), nested);
    }

    #[test]
    fn polygon_from_literal_buffer() {
        let flat = FlatPolygon::try_new(
            buffer(vec![
                0., 0., 4., 0., 4., 4., 0., 0., 2., 1., 3., 1., 3., 2., 2., 1.,
            ]),
            vec![8, 16],
        )
        .unwrap();
        assert_eq!(Polygon::try_from(&flat).unwrap(), test::polygon::p0());
    }

    #[test]
    fn multipolygon_cursor_spans_polygons() {
        let coords = FlatMultiPolygon::try_from(&test::multipolygon::mp1())
            .unwrap()
            .into_inner()
            .0;
        let flat = FlatMultiPolygon::try_new(coords, vec![vec![8], vec![16, 24]]).unwrap();
        let tree = MultiPolygon::try_from(&flat).unwrap();
        assert_eq!(tree, test::multipolygon::mp1());
        assert_eq!(
            tree.polygons()[1].interiors()[0].coords()[0],
            Coord::new(2., 1.)
        );
    }

    #[test]
    fn empty_geometries() {
        let flat = FlatLineString::new(InterleavedCoordBuffer::empty(Dimension::XY));
        let tree = LineString::try_from(&flat).unwrap();
        assert!(tree.is_empty());

        let flat = FlatPolygon::try_new(InterleavedCoordBuffer::empty(Dimension::XYZ), vec![])
            .unwrap();
        assert_eq!(
            Polygon::try_from(&flat).unwrap(),
            Polygon::empty(Dimension::XYZ)
        );

        let flat =
            FlatMultiPolygon::try_new(InterleavedCoordBuffer::empty(Dimension::XY), vec![])
                .unwrap();
        assert!(MultiPolygon::try_from(&flat).unwrap().is_empty());
    }

    #[test]
    fn deserialized_offsets_are_checked() {
        let json = r#"{"coords":{"coords":[0.0,0.0,1.0,1.0],"dim":"XY"},"ends":[4,2]}"#;
        let flat: FlatPolygon = serde_json::from_str(json).unwrap();
        assert!(matches!(
            Polygon::try_from(&flat),
            Err(GeoTranscodeError::InvalidOffsets(_))
        ));
    }
}
