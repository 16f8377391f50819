//! # Error Handling for the Voxel client
//!
//! Every fallible operation in this crate returns [`Result<T>`], whose error
//! type is the [`Error`] enum below.
//!
//! ## Error Hierarchy
//!
//! ```text
//! Error
//! ├── Api            - Non-2xx response, normalized to a single message
//! ├── Network        - Transport failure before a response arrived (via NetworkError)
//! ├── Parse          - Malformed JSON on a successful response (via ParseError)
//! ├── InvalidRequest - Bad input (empty path, unserializable body, oversized response)
//! ├── Config         - Configuration rejected by validation
//! ├── Session        - Session store lifecycle misuse
//! ├── Timeout        - Opt-in request timeout elapsed
//! └── Context        - Error with additional context
//! ```
//!
//! ## Normalized API errors
//!
//! `Error::Api` displays its message and nothing else, so callers that only
//! care about "what did the server say" can use `err.to_string()`:
//!
//! ```rust
//! use voxel_core::error::Error;
//!
//! let err = Error::api(404, "not found");
//! assert_eq!(err.to_string(), "not found");
//! assert_eq!(err.status(), Some(404));
//! ```
//!
//! ## Adding Context
//!
//! ```rust
//! use voxel_core::error::{Error, Result};
//!
//! fn load_project(id: &str) -> Result<()> {
//!     fetch(id).map_err(|e| e.context(format!("Failed to load project {id}")))?;
//!     Ok(())
//! }
//! # fn fetch(_: &str) -> Result<()> { Ok(()) }
//! ```

mod config;
mod convert;
mod network;
mod parse;

use std::borrow::Cow;
use std::error::Error as StdError;
use thiserror::Error;

pub use config::{ConfigValidationError, ValidationResult};
pub use network::NetworkError;
pub use parse::ParseError;

/// Result type alias for all Voxel client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The primary error type for the Voxel client.
///
/// Large variants are boxed to keep the enum small; messages use
/// `Cow<'static, str>` so static strings do not allocate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The server answered with a non-2xx status.
    ///
    /// `message` is already normalized (`detail`, then `message`, then the
    /// status text, then `HTTP error! status: <code>`).
    #[error("{message}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Normalized, human-readable message
        message: Cow<'static, str>,
    },

    /// Network-related errors encapsulating transport layer issues.
    #[error("Network error: {0}")]
    Network(Box<NetworkError>),

    /// Errors during response parsing.
    #[error("Parse error: {0}")]
    Parse(Box<ParseError>),

    /// Invalid request input.
    #[error("Invalid request: {0}")]
    InvalidRequest(Cow<'static, str>),

    /// Configuration failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigValidationError),

    /// Session store used outside its lifecycle.
    #[error("Session error: {0}")]
    Session(Cow<'static, str>),

    /// Request did not complete within the configured timeout.
    #[error("Timeout: {0}")]
    Timeout(Cow<'static, str>),

    /// Error with additional context, preserving the error chain.
    #[error("{context}")]
    Context {
        /// Context message describing what operation failed
        context: String,
        /// The underlying error
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    // ==================== Constructor Methods ====================

    /// Creates a normalized API error.
    pub fn api(status: u16, message: impl Into<Cow<'static, str>>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Creates a network error from a message.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(Box::new(NetworkError::ConnectionFailed(msg.into())))
    }

    /// Creates an invalid request error.
    pub fn invalid_request(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Creates a session lifecycle error.
    pub fn session(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Session(msg.into())
    }

    /// Creates a timeout error.
    pub fn timeout(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Timeout(msg.into())
    }

    // ==================== Context Methods ====================

    /// Attaches context to an existing error.
    ///
    /// ```rust
    /// use voxel_core::error::Error;
    ///
    /// let err = Error::api(500, "boom").context("Failed to list projects");
    /// assert_eq!(err.to_string(), "Failed to list projects");
    /// assert_eq!(err.root_cause().to_string(), "boom");
    /// ```
    #[must_use]
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    // ==================== Chain Traversal Methods ====================

    fn iter_chain(&self) -> impl Iterator<Item = &Error> {
        std::iter::successors(Some(self), |err| match err {
            Error::Context { source, .. } => Some(source.as_ref()),
            _ => None,
        })
    }

    /// Returns the root cause of the error, skipping Context layers.
    #[must_use]
    pub fn root_cause(&self) -> &Error {
        self.iter_chain().last().unwrap_or(self)
    }

    /// Generates a detailed error report with the full chain.
    #[must_use]
    pub fn report(&self) -> String {
        use std::fmt::Write;
        let mut report = String::new();
        report.push_str(&self.to_string());

        let mut current: Option<&(dyn StdError + 'static)> = self.source();
        while let Some(err) = current {
            let _ = write!(report, "\nCaused by: {err}");
            current = err.source();
        }
        report
    }

    // ==================== Helper Methods (Context Penetrating) ====================

    /// Returns the HTTP status of an API error (penetrates Context layers).
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self.root_cause() {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the status and normalized message of an API error
    /// (penetrates Context layers).
    #[must_use]
    pub fn as_api(&self) -> Option<(u16, &str)> {
        match self.root_cause() {
            Error::Api { status, message } => Some((*status, message.as_ref())),
            _ => None,
        }
    }

    /// Returns true if the server answered 401 or 403.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Returns true if the server answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns true if no response was received (penetrates Context layers).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self.root_cause(), Error::Network(_) | Error::Timeout(_))
    }
}
