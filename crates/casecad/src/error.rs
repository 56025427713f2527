//! Error types for case generation.

use casecad_standards::StandardsError;
use thiserror::Error;

/// Errors that can occur while generating geometry.
#[derive(Error, Debug)]
pub enum CadError {
    /// An alignment referenced an anchor name missing from its set.
    #[error("anchor \"{name}\" not found on \"{part}\"")]
    AnchorNotFound {
        /// Name of the part whose anchor set was probed.
        part: String,
        /// The missing anchor path.
        name: String,
    },

    /// A configuration key did not resolve in the standards registry.
    #[error(transparent)]
    Standards(#[from] StandardsError),

    /// A dimension was zero or negative.
    #[error("invalid dimension: {field} must be positive (got {value})")]
    InvalidDimension {
        /// The offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A cylinder tessellation was requested with too few segments.
    #[error("invalid segment count {0}: cylinders need at least 3 segments")]
    InvalidSegments(u32),

    /// A configuration combination is not supported.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The geometry has no vertices or triangles.
    #[error("empty geometry")]
    EmptyGeometry,

    /// An I/O error occurred during export.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for case generation.
pub type Result<T> = std::result::Result<T, CadError>;
