use crate::coord::InterleavedCoordBuffer;
use crate::error::{GeoTranscodeError, Result};
use crate::flat::geometry::*;
use crate::geometry::*;

/// Append every ring to `buffer`, returning the absolute scalar offset at which each one ends.
fn append_rings(rings: &[LinearRing], buffer: &mut InterleavedCoordBuffer) -> Result<Vec<usize>> {
    let mut ends = Vec::with_capacity(rings.len());
    for ring in rings {
        ring.coords()
            .iter()
            .try_for_each(|coord| buffer.push_coord(coord))?;
        ends.push(buffer.coords().len());
    }
    Ok(ends)
}

impl TryFrom<&Point> for FlatPoint {
    type Error = GeoTranscodeError;

    fn try_from(value: &Point) -> Result<Self> {
        FlatPoint::try_new(InterleavedCoordBuffer::from_coords(
            &[value.coord()],
            value.dim(),
        )?)
    }
}

impl TryFrom<&LineString> for FlatLineString {
    type Error = GeoTranscodeError;

    fn try_from(value: &LineString) -> Result<Self> {
        Ok(FlatLineString::new(InterleavedCoordBuffer::from_coords(
            value.coords(),
            value.dim(),
        )?))
    }
}

impl TryFrom<&LinearRing> for FlatLinearRing {
    type Error = GeoTranscodeError;

    fn try_from(value: &LinearRing) -> Result<Self> {
        Ok(FlatLinearRing::new(InterleavedCoordBuffer::from_coords(
            value.coords(),
            value.dim(),
        )?))
    }
}

impl TryFrom<&Polygon> for FlatPolygon {
    type Error = GeoTranscodeError;

    fn try_from(value: &Polygon) -> Result<Self> {
        let num_coords = value.rings().iter().map(|ring| ring.num_coords()).sum();
        let mut buffer = InterleavedCoordBuffer::with_capacity(num_coords, value.dim());
        let ends = append_rings(value.rings(), &mut buffer)?;
        FlatPolygon::try_new(buffer, ends)
    }
}

impl TryFrom<&MultiPoint> for FlatMultiPoint {
    type Error = GeoTranscodeError;

    fn try_from(value: &MultiPoint) -> Result<Self> {
        let mut buffer = InterleavedCoordBuffer::with_capacity(value.num_points(), value.dim());
        value
            .points()
            .iter()
            .try_for_each(|point| buffer.push_coord(&point.coord()))?;
        Ok(FlatMultiPoint::new(buffer))
    }
}

impl TryFrom<&MultiLineString> for FlatMultiLineString {
    type Error = GeoTranscodeError;

    fn try_from(value: &MultiLineString) -> Result<Self> {
        let num_coords = value
            .line_strings()
            .iter()
            .map(|ls| ls.num_coords())
            .sum();
        let mut buffer = InterleavedCoordBuffer::with_capacity(num_coords, value.dim());
        let mut ends = Vec::with_capacity(value.num_line_strings());
        for line_string in value.line_strings() {
            line_string
                .coords()
                .iter()
                .try_for_each(|coord| buffer.push_coord(coord))?;
            ends.push(buffer.coords().len());
        }
        FlatMultiLineString::try_new(buffer, ends)
    }
}

impl TryFrom<&MultiPolygon> for FlatMultiPolygon {
    type Error = GeoTranscodeError;

    fn try_from(value: &MultiPolygon) -> Result<Self> {
        let num_coords = value
            .polygons()
            .iter()
            .flat_map(|polygon| polygon.rings())
            .map(|ring| ring.num_coords())
            .sum();
        let mut buffer = InterleavedCoordBuffer::with_capacity(num_coords, value.dim());
        // One buffer for all polygons, so ring offsets keep counting across polygon boundaries.
        let endss = value
            .polygons()
            .iter()
            .map(|polygon| append_rings(polygon.rings(), &mut buffer))
            .collect::<Result<Vec<_>>>()?;
        FlatMultiPolygon::try_new(buffer, endss)
    }
}

impl TryFrom<&GeometryCollection> for FlatGeometryCollection {
    type Error = GeoTranscodeError;

    fn try_from(value: &GeometryCollection) -> Result<Self> {
        let geometries = value
            .geometries()
            .iter()
            .map(FlatGeometry::try_from)
            .collect::<Result<Vec<_>>>()?;
        FlatGeometryCollection::try_new(geometries, value.dim())
    }
}

impl TryFrom<&Geometry> for FlatGeometry {
    type Error = GeoTranscodeError;

    fn try_from(value: &Geometry) -> Result<Self> {
        let flat = match value {
            Geometry::Point(g) => FlatPoint::try_from(g)?.into(),
            Geometry::LineString(g) => FlatLineString::try_from(g)?.into(),
            Geometry::LinearRing(g) => FlatLinearRing::try_from(g)?.into(),
            Geometry::Polygon(g) => FlatPolygon::try_from(g)?.into(),
            Geometry::MultiPoint(g) => FlatMultiPoint::try_from(g)?.into(),
            Geometry::MultiLineString(g) => FlatMultiLineString::try_from(g)?.into(),
            Geometry::MultiPolygon(g) => FlatMultiPolygon::try_from(g)?.into(),
            Geometry::GeometryCollection(g) => FlatGeometryCollection::try_from(g)?.into(),
        };
        Ok(flat)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::Dimension;
    use crate::test::{linestring, multilinestring, multipolygon, point, polygon};

    #[test]
    fn polygon_ends() {
        let flat = FlatPolygon::try_from(&polygon::p0()).unwrap();
        assert_eq!(
            flat.coords().coords(),
            &[0., 0., 4., 0., 4., 4., 0., 0., 2., 1., 3., 1., 3., 2., 2., 1.]
        );
        assert_eq!(flat.ends(), &[8, 16]);
        assert_eq!(flat.coords().stride(), 2);

        let flat = FlatPolygon::try_from(&polygon::p1()).unwrap();
        assert_eq!(flat.ends(), &[8]);
    }

    #[test]
    fn multipolygon_endss_are_absolute() {
        let flat = FlatMultiPolygon::try_from(&multipolygon::mp0()).unwrap();
        assert_eq!(flat.coords().coords().len(), 16);
        assert_eq!(flat.endss(), &[vec![8], vec![16]]);

        let flat = FlatMultiPolygon::try_from(&multipolygon::mp1()).unwrap();
        assert_eq!(flat.endss(), &[vec![8], vec![16, 24]]);
    }

    #[test]
    fn multilinestring_ends() {
        let flat = FlatMultiLineString::try_from(&multilinestring::ml0()).unwrap();
        assert_eq!(flat.coords().coords(), &[1., 2., 3., 4., 5., 6., 7., 8.]);
        assert_eq!(flat.ends(), &[4, 8]);
    }

    #[test]
    fn empty_line_string() {
        let flat = FlatLineString::try_from(&LineString::empty(Dimension::XY)).unwrap();
        assert!(flat.coords().coords().is_empty());
    }

    #[test]
    fn higher_dimensions_keep_stride() {
        let flat = FlatLineString::try_from(&linestring::ls_xyzm()).unwrap();
        assert_eq!(flat.coords().stride(), 4);
        assert_eq!(flat.coords().coords(), &[1., 2., 3., 4., 5., 6., 7., 8.]);

        let flat = FlatPoint::try_from(&point::p_xyz()).unwrap();
        assert_eq!(flat.dim(), Dimension::XYZ);

        let flat = FlatPolygon::try_from(&polygon::p_xyz()).unwrap();
        assert_eq!(flat.ends(), &[12]);
    }
}
