//! Bearer access token with automatic memory zeroization.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// An access token issued by the identity provider.
///
/// The underlying memory is cleared on drop, and `Debug`/`Display` are
/// redacted so the token never reaches a log line by accident.
///
/// ```rust
/// use voxel_core::session::AccessToken;
///
/// let token = AccessToken::new("eyJhbGciOi");
/// assert_eq!(token.expose_secret(), "eyJhbGciOi");
/// assert_eq!(token.bearer(), "Bearer eyJhbGciOi");
/// assert_eq!(format!("{token:?}"), "[REDACTED]");
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw token string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw token. Use immediately; do not store the reference.
    #[inline]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// Returns the `Authorization` header value for this token.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }

    /// Returns true if the token string is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl From<String> for AccessToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for AccessToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
