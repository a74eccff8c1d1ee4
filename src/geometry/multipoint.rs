use serde::{Deserialize, Serialize};

use crate::datatypes::Dimension;
use crate::error::Result;
use crate::geometry::{check_dims, Point};

/// A sequence of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPoint {
    points: Vec<Point>,
    dim: Dimension,
}

impl MultiPoint {
    /// # Errors
    ///
    /// - if any point has a layout other than `dim`
    pub fn try_new(points: Vec<Point>, dim: Dimension) -> Result<Self> {
        check_dims(points.iter().map(|point| point.dim()), dim)?;
        Ok(Self { points, dim })
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            points: vec![],
            dim,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    pub fn into_inner(self) -> Vec<Point> {
        self.points
    }
}

impl From<Vec<[f64; 2]>> for MultiPoint {
    fn from(value: Vec<[f64; 2]>) -> Self {
        Self {
            points: value.into_iter().map(Point::from).collect(),
            dim: Dimension::XY,
        }
    }
}
