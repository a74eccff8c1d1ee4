use serde::{Deserialize, Serialize};

use crate::coord::{Coord, InterleavedCoordBuffer};
use crate::datatypes::Dimension;
use crate::error::{GeoTranscodeError, Result};

/// A single coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    coord: Coord,
}

impl Point {
    /// Create a new XY point.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            coord: Coord::new(x, y),
        }
    }

    /// Read a point from a buffer holding exactly one coordinate.
    ///
    /// # Errors
    ///
    /// - if the buffer is empty or holds more than one coordinate
    pub fn try_from_coords(coords: &InterleavedCoordBuffer) -> Result<Self> {
        match (coords.len(), coords.coord(0)) {
            (1, Some(coord)) => Ok(Self { coord }),
            (len, _) => Err(GeoTranscodeError::InvalidOffsets(format!(
                "a point holds exactly one coordinate, found {len}"
            ))),
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn x(&self) -> f64 {
        self.coord.x
    }

    pub fn y(&self) -> f64 {
        self.coord.y
    }

    pub fn dim(&self) -> Dimension {
        self.coord.dim()
    }
}

impl From<Coord> for Point {
    fn from(coord: Coord) -> Self {
        Self { coord }
    }
}

impl From<[f64; 2]> for Point {
    fn from(value: [f64; 2]) -> Self {
        Self {
            coord: value.into(),
        }
    }
}
