use serde::{Deserialize, Serialize};

use crate::datatypes::Dimension;
use crate::error::Result;
use crate::geometry::{check_dims, Polygon};

/// A sequence of polygons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    dim: Dimension,
}

impl MultiPolygon {
    /// # Errors
    ///
    /// - if any polygon has a layout other than `dim`
    pub fn try_new(polygons: Vec<Polygon>, dim: Dimension) -> Result<Self> {
        check_dims(polygons.iter().map(|polygon| polygon.dim()), dim)?;
        Ok(Self { polygons, dim })
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            polygons: vec![],
            dim,
        }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    pub fn into_inner(self) -> Vec<Polygon> {
        self.polygons
    }
}

impl From<Vec<Vec<Vec<[f64; 2]>>>> for MultiPolygon {
    fn from(value: Vec<Vec<Vec<[f64; 2]>>>) -> Self {
        Self {
            polygons: value.into_iter().map(Polygon::from).collect(),
            dim: Dimension::XY,
        }
    }
}
