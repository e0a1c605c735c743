/// Error types for the lake registry
use thiserror::Error;

/// Main error type for registry construction and lookups
#[derive(Error, Debug)]
pub enum LakeError {
    /// Nearest-lake lookup against a registry with no lakes
    #[error("Lake registry is empty")]
    EmptyRegistry,

    /// Two registry rows share the same id
    #[error("Duplicate lake id: {0}")]
    DuplicateId(String),

    /// Latitude or longitude outside of the valid degree range
    #[error("Coordinates out of range for lake {id}: ({lat}, {lon})")]
    CoordinateOutOfRange { id: String, lat: f64, lon: f64 },

    /// Quality column holds something other than fresh/normal/hazardous
    #[error("Unknown water quality: {0}")]
    UnknownQuality(String),

    /// Failed to parse the registry CSV
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Lookup by id found nothing
    #[error("Lake not found: {0}")]
    LakeNotFound(String),
}

/// Type alias for Results using LakeError
pub type Result<T> = std::result::Result<T, LakeError>;
