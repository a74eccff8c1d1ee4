use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::datatypes::Dimension;
use crate::error::Result;
use crate::geometry::check_coords;

macro_rules! impl_coord_sequence {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            coords: Vec<Coord>,
            dim: Dimension,
        }

        impl $name {
            /// Create a new geometry from coordinates that all have the layout `dim`.
            ///
            /// # Errors
            ///
            /// - if any coordinate has a layout other than `dim`
            pub fn try_new(coords: Vec<Coord>, dim: Dimension) -> Result<Self> {
                check_coords(&coords, dim)?;
                Ok(Self { coords, dim })
            }

            /// An empty geometry of the given layout.
            pub fn empty(dim: Dimension) -> Self {
                Self {
                    coords: vec![],
                    dim,
                }
            }

            pub fn coords(&self) -> &[Coord] {
                &self.coords
            }

            pub fn num_coords(&self) -> usize {
                self.coords.len()
            }

            pub fn is_empty(&self) -> bool {
                self.coords.is_empty()
            }

            pub fn dim(&self) -> Dimension {
                self.dim
            }

            pub fn into_inner(self) -> Vec<Coord> {
                self.coords
            }
        }

        impl From<Vec<[f64; 2]>> for $name {
            fn from(value: Vec<[f64; 2]>) -> Self {
                Self {
                    coords: value.into_iter().map(Coord::from).collect(),
                    dim: Dimension::XY,
                }
            }
        }
    };
}

impl_coord_sequence!(
    /// An ordered sequence of coordinates.
    LineString
);

impl_coord_sequence!(
    /// A ring of a polygon.
    ///
    /// By convention the first and last coordinates are equal. Closure is the caller's
    /// responsibility and is never checked or repaired here.
    LinearRing
);

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::GeoTranscodeError;

    #[test]
    fn mixed_layouts_are_rejected() {
        let err = LineString::try_new(
            vec![Coord::new_xyz(0., 0., 1.), Coord::new(1., 1.)],
            Dimension::XYZ,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GeoTranscodeError::UnsupportedDimensionality(2)
        ));
    }

    #[test]
    fn open_ring_is_kept_as_is() {
        let ring = LinearRing::from(vec![[0., 0.], [1., 0.], [1., 1.]]);
        assert_eq!(ring.num_coords(), 3);
        assert_ne!(ring.coords().first(), ring.coords().last());
    }
}
