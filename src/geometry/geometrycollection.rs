use serde::{Deserialize, Serialize};

use crate::datatypes::Dimension;
use crate::error::Result;
use crate::geometry::{check_dims, first_dim, Geometry};

/// A heterogeneous, ordered sequence of geometries, possibly nesting other collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    dim: Dimension,
}

impl GeometryCollection {
    /// # Errors
    ///
    /// - if any member has a layout other than `dim`
    pub fn try_new(geometries: Vec<Geometry>, dim: Dimension) -> Result<Self> {
        check_dims(geometries.iter().map(|g| g.dim()), dim)?;
        Ok(Self { geometries, dim })
    }

    /// Create a new collection taking its layout from the first member (XY when empty).
    ///
    /// # Errors
    ///
    /// - if the members do not share one layout
    pub fn try_from_geometries(geometries: Vec<Geometry>) -> Result<Self> {
        let dim = first_dim(geometries.iter().map(|g| g.dim()));
        Self::try_new(geometries, dim)
    }

    /// Create a new collection without checking member layouts.
    pub(crate) fn new_unchecked(geometries: Vec<Geometry>, dim: Dimension) -> Self {
        Self { geometries, dim }
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            geometries: vec![],
            dim,
        }
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    pub fn into_inner(self) -> Vec<Geometry> {
        self.geometries
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Coord;
    use crate::error::GeoTranscodeError;
    use crate::geometry::Point;

    #[test]
    fn layout_from_first_member() {
        let gc = GeometryCollection::try_from_geometries(vec![
            Point::from(Coord::new_xyz(0., 0., 0.)).into(),
            Point::from(Coord::new_xyz(1., 1., 1.)).into(),
        ])
        .unwrap();
        assert_eq!(gc.dim(), Dimension::XYZ);

        let err = GeometryCollection::try_from_geometries(vec![
            Point::from(Coord::new_xyz(0., 0., 0.)).into(),
            Point::new(1., 1.).into(),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            GeoTranscodeError::UnsupportedDimensionality(2)
        ));
    }
}
