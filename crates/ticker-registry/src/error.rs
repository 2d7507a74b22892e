//! Error types for registry construction

use thiserror::Error;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Error type for registry construction and loading
///
/// A missed lookup is not an error; `AliasRegistry::lookup` returns `None`
/// for unknown names. This type only covers failures while building a
/// registry from external data.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// JSON parsing failed while loading an alias table
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An alias was declared with no tickers behind it
    #[error("alias {0} has an empty expansion")]
    EmptyExpansion(String),
}
