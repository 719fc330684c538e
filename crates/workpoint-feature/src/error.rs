//! Error types for the feature layer.

use thiserror::Error;

/// Errors raised while resolving edge references.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    /// The referenced shape is not in the store.
    #[error("unknown shape: {0}")]
    ShapeNotFound(String),

    /// The referenced edge ordinal does not exist on the shape.
    #[error("shape {shape} has {count} edge(s), no Edge{ordinal}")]
    EdgeOutOfRange {
        /// Shape identifier.
        shape: String,
        /// The 1-based ordinal that was requested.
        ordinal: usize,
        /// How many edges the shape actually has.
        count: usize,
    },
}

/// Result type for feature operations.
pub type Result<T> = std::result::Result<T, FeatureError>;
