//! Network-related error types.

use std::error::Error as StdError;
use thiserror::Error;

/// Transport failures that happen before any HTTP response is received.
///
/// Wraps `reqwest::Error` without exposing it in the public API.
///
/// ```rust
/// use voxel_core::error::NetworkError;
///
/// fn describe(err: &NetworkError) -> &'static str {
///     match err {
///         NetworkError::Timeout => "timed out",
///         NetworkError::ConnectionFailed(_) => "connection failed",
///         _ => "transport failure",
///     }
/// }
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NetworkError {
    /// Request timed out at the transport level.
    #[error("Request timeout")]
    Timeout,

    /// Connection failed (refused, reset, DNS).
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Failed while reading the response body.
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// Opaque transport error for underlying issues.
    #[error("Transport error")]
    Transport(#[source] Box<dyn StdError + Send + Sync + 'static>),
}
