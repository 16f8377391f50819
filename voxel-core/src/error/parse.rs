//! Parsing-related error types.

use thiserror::Error;

/// Errors raised while turning a successful response into a value.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseError {
    /// Body was not valid JSON, or did not match the requested type.
    #[error("Failed to deserialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}
