use serde::{Deserialize, Serialize};

use crate::datatypes::Dimension;
use crate::error::Result;
use crate::geometry::{check_dims, LineString};

/// A sequence of line strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
    dim: Dimension,
}

impl MultiLineString {
    /// # Errors
    ///
    /// - if any line string has a layout other than `dim`
    pub fn try_new(line_strings: Vec<LineString>, dim: Dimension) -> Result<Self> {
        check_dims(line_strings.iter().map(|ls| ls.dim()), dim)?;
        Ok(Self { line_strings, dim })
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            line_strings: vec![],
            dim,
        }
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    pub fn num_line_strings(&self) -> usize {
        self.line_strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_strings.is_empty()
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    pub fn into_inner(self) -> Vec<LineString> {
        self.line_strings
    }
}

impl From<Vec<Vec<[f64; 2]>>> for MultiLineString {
    fn from(value: Vec<Vec<[f64; 2]>>) -> Self {
        Self {
            line_strings: value.into_iter().map(LineString::from).collect(),
            dim: Dimension::XY,
        }
    }
}
