//! Error types for the diagmeta library.
//!
//! Hard failures travel through this enum; soft, aggregated findings travel
//! through [`crate::report::ValidationReport`] instead.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for diagmeta operations.
#[derive(Debug, Error)]
pub enum MetaError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The front end could not produce an attribute-value tree for a file.
    /// Fatal for that file only; the rest of the run continues.
    #[error("Structural parse failure in '{file}': {message}")]
    StructuralParse { file: String, message: String },

    /// A model-relative vertical dimension was declared without its top level.
    #[error("Top model level not declared")]
    TopLevelNotDeclared,

    /// A model-relative vertical dimension was declared without its bottom level.
    #[error("Bottom model level not declared")]
    BottomLevelNotDeclared,

    /// The dimension constructor name carries neither "height" nor "depth".
    #[error("Attribute 'positive' has been declared incorrectly")]
    PositiveDeclaredIncorrectly,

    /// No constructor call could be found in a dimension declaration.
    #[error("No dimension constructor found in '{0}'")]
    MalformedDimensionCall(String),

    /// A fixed-level boundary token could not be read as a number.
    #[error("Level boundary '{0}' is not a valid number")]
    InvalidLevelBoundary(String),

    /// A non-spatial dimension sub-record carried an attribute the parser
    /// does not recognise.
    #[error("Unrecognised non-spatial-dimension attribute '{attribute}' in {field}")]
    UnknownDimensionAttribute { attribute: String, field: String },

    /// `dimension_category` was neither NUMERICAL nor CATEGORICAL.
    #[error("Unrecognised dimension category '{category}' in {field}")]
    UnknownDimensionCategory { category: String, field: String },

    /// An axis definition entry could not be read as a number.
    #[error("Axis value '{value}' in {field} is not a valid number")]
    InvalidAxisValue { value: String, field: String },

    /// Every non-spatial dimension must be named.
    #[error("Non-spatial dimension in {field} requires 'dimension_name' attribute")]
    DimensionNameRequired { field: String },

    /// Two structurally different definitions were registered under one
    /// dimension name. `existing` lists every field already attached to the
    /// stored definition.
    #[error(
        "Non-spatial dimension '{name}' for field '{field}' does not match the \
         previous definition used by: {existing}"
    )]
    DimensionConflict {
        name: String,
        field: String,
        existing: String,
    },

    /// A snapshot document is missing its checksum entry.
    #[error("Snapshot has no checksum entry")]
    MissingChecksum,

    /// A snapshot checksum does not match its payload.
    #[error("Snapshot checksum mismatch: stored '{stored}', computed '{computed}'")]
    ChecksumMismatch { stored: String, computed: String },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for diagmeta operations.
pub type Result<T> = std::result::Result<T, MetaError>;
