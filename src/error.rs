//! Defines [`GeoTranscodeError`], representing all errors returned by this crate.

use std::fmt::Debug;

use thiserror::Error;

use crate::datatypes::GeometryType;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoTranscodeError {
    /// The geometry kind is outside the supported set, or cannot be represented in the target
    /// encoding (for example a bare LinearRing written as WKB).
    #[error("Unsupported geometry kind: {0}")]
    UnsupportedGeometryKind(String),

    /// Flat-buffer offsets are not monotonic, are not aligned to the stride, or do not end at the
    /// length of the coordinate buffer.
    #[error("Invalid offsets: {0}")]
    InvalidOffsets(String),

    /// A member of a multi geometry or collection did not resolve to the kind its parent requires.
    #[error("Kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        /// The kind required by the parent.
        expected: GeometryType,
        /// The kind the child actually resolved to.
        found: GeometryType,
    },

    /// Coordinate layout outside the supported strides, or mixed layouts within one geometry.
    ///
    /// Carries the offending number of scalars per coordinate.
    #[error("Unsupported dimensionality: {0}")]
    UnsupportedDimensionality(usize),

    /// Truncated, corrupt or unrecognized WKB input.
    #[error("Malformed WKB: {0}")]
    MalformedWKB(String),

    /// Failure reported by a handle engine.
    #[error("Handle engine error: {0}")]
    Engine(String),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoTranscodeError>;
