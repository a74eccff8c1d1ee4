//! Coordinates of the tree representation and the interleaved scalar buffer shared by the flat and
//! handle representations.

use serde::{Deserialize, Serialize};

use crate::datatypes::Dimension;
use crate::error::{GeoTranscodeError, Result};

/// A single coordinate.
///
/// The layout of a coordinate is given by which of the optional ordinates are present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Coord {
    /// Create a new XY coordinate.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    /// Create a new XYZ coordinate.
    pub fn new_xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: None,
        }
    }

    /// Create a new XYM coordinate.
    pub fn new_xym(x: f64, y: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: Some(m),
        }
    }

    /// Create a new XYZM coordinate.
    pub fn new_xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: Some(m),
        }
    }

    /// Read one coordinate from a slice of exactly `dim.size()` scalars.
    pub(crate) fn from_slice(values: &[f64], dim: Dimension) -> Self {
        match dim {
            Dimension::XY => Self::new(values[0], values[1]),
            Dimension::XYZ => Self::new_xyz(values[0], values[1], values[2]),
            Dimension::XYM => Self::new_xym(values[0], values[1], values[2]),
            Dimension::XYZM => Self::new_xyzm(values[0], values[1], values[2], values[3]),
        }
    }

    /// The layout of this coordinate.
    pub fn dim(&self) -> Dimension {
        Dimension::from_flags(self.z.is_some(), self.m.is_some())
    }

    /// Append the scalars of this coordinate, in layout order, to `buffer`.
    pub(crate) fn extend_scalars(&self, buffer: &mut Vec<f64>) {
        buffer.push(self.x);
        buffer.push(self.y);
        if let Some(z) = self.z {
            buffer.push(z);
        }
        if let Some(m) = self.m {
            buffer.push(m);
        }
    }
}

impl From<[f64; 2]> for Coord {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<(f64, f64)> for Coord {
    fn from(value: (f64, f64)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// A contiguous buffer of interleaved scalars, `dim.size()` scalars per coordinate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InterleavedCoordBuffer {
    coords: Vec<f64>,
    dim: Dimension,
}

impl InterleavedCoordBuffer {
    /// Construct a new buffer, checking that it holds a whole number of coordinates.
    pub fn try_new(coords: Vec<f64>, dim: Dimension) -> Result<Self> {
        if coords.len() % dim.size() != 0 {
            return Err(GeoTranscodeError::InvalidOffsets(format!(
                "coordinate buffer of {} scalars is not a multiple of stride {}",
                coords.len(),
                dim.size()
            )));
        }
        Ok(Self { coords, dim })
    }

    /// Construct a new buffer from a dimensionality reported by an external engine.
    pub fn try_from_raw(coords: Vec<f64>, dimensions: usize) -> Result<Self> {
        Self::try_new(coords, Dimension::try_from_size(dimensions)?)
    }

    /// An empty buffer of the given layout.
    pub fn empty(dim: Dimension) -> Self {
        Self {
            coords: Vec::new(),
            dim,
        }
    }

    pub(crate) fn with_capacity(num_coords: usize, dim: Dimension) -> Self {
        Self {
            coords: Vec::with_capacity(num_coords * dim.size()),
            dim,
        }
    }

    /// Write a sequence of tree coordinates into a new buffer.
    pub fn from_coords(coords: &[Coord], dim: Dimension) -> Result<Self> {
        let mut buffer = Self::with_capacity(coords.len(), dim);
        for coord in coords {
            buffer.push_coord(coord)?;
        }
        Ok(buffer)
    }

    /// Append a tree coordinate, which must match the layout of this buffer.
    pub fn push_coord(&mut self, coord: &Coord) -> Result<()> {
        self.dim.expect(coord.dim())?;
        coord.extend_scalars(&mut self.coords);
        Ok(())
    }

    /// Append every scalar of another buffer of the same layout.
    pub(crate) fn extend_from(&mut self, other: &InterleavedCoordBuffer) -> Result<()> {
        self.dim.expect(other.dim)?;
        self.coords.extend_from_slice(&other.coords);
        Ok(())
    }

    /// The layout of the coordinates in this buffer.
    pub fn dim(&self) -> Dimension {
        self.dim
    }

    /// The number of scalars per coordinate.
    pub fn stride(&self) -> usize {
        self.dim.size()
    }

    /// The number of coordinates (not scalars) in this buffer.
    pub fn len(&self) -> usize {
        self.coords.len() / self.stride()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The raw scalars.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.coords
    }

    /// Read the coordinate at index `i`.
    ///
    /// Returns `None` if `i` is out of bounds.
    pub fn coord(&self, i: usize) -> Option<Coord> {
        let stride = self.stride();
        self.coords
            .get(i * stride..(i + 1) * stride)
            .map(|values| Coord::from_slice(values, self.dim))
    }

    /// Slice the scalar range `start..end` into tree coordinates.
    ///
    /// `start` and `end` are scalar offsets and must already be stride-aligned and in bounds.
    pub(crate) fn coords_in(&self, start: usize, end: usize) -> Vec<Coord> {
        self.coords[start..end]
            .chunks_exact(self.stride())
            .map(|values| Coord::from_slice(values, self.dim))
            .collect()
    }

    /// Iterate over the coordinates of this buffer.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Coord> + '_ {
        self.coords
            .chunks_exact(self.stride())
            .map(|values| Coord::from_slice(values, self.dim))
    }
}
