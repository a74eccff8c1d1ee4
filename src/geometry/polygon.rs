use serde::{Deserialize, Serialize};

use crate::datatypes::Dimension;
use crate::error::Result;
use crate::geometry::{check_dims, LinearRing};

/// An exterior ring followed by zero or more interior rings.
///
/// Containment of the holes is never validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    rings: Vec<LinearRing>,
    dim: Dimension,
}

impl Polygon {
    /// Create a new polygon. The first ring is the exterior.
    ///
    /// # Errors
    ///
    /// - if any ring has a layout other than `dim`
    pub fn try_new(rings: Vec<LinearRing>, dim: Dimension) -> Result<Self> {
        check_dims(rings.iter().map(|ring| ring.dim()), dim)?;
        Ok(Self { rings, dim })
    }

    /// A polygon without rings.
    pub fn empty(dim: Dimension) -> Self {
        Self { rings: vec![], dim }
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> &[LinearRing] {
        &self.rings
    }

    pub fn exterior(&self) -> Option<&LinearRing> {
        self.rings.first()
    }

    pub fn interiors(&self) -> &[LinearRing] {
        self.rings.get(1..).unwrap_or_default()
    }

    pub fn num_interiors(&self) -> usize {
        self.rings.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    pub fn into_inner(self) -> Vec<LinearRing> {
        self.rings
    }
}

impl From<Vec<Vec<[f64; 2]>>> for Polygon {
    fn from(value: Vec<Vec<[f64; 2]>>) -> Self {
        Self {
            rings: value.into_iter().map(LinearRing::from).collect(),
            dim: Dimension::XY,
        }
    }
}
