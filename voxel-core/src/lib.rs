//! Voxel Core Library
//!
//! The authenticated HTTP layer behind every Voxel frontend call: one client
//! that attaches the current session's bearer token, speaks JSON, and turns
//! failed responses into a single readable message.
//!
//! # Features
//!
//! - **Session-aware**: reads the access token from a [`SessionProvider`] on every call
//! - **Normalized errors**: `detail`, then `message`, then status text, then a default
//! - **Async/Await**: built on tokio and reqwest
//! - **Error Handling**: error types built with `thiserror`
//!
//! # Example
//!
//! ```rust,no_run
//! use voxel_core::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let session = std::sync::Arc::new(SessionStore::new());
//! session.init(Some(Session::new("eyJhbGciOi...")))?;
//!
//! let client = ApiClient::new(ApiConfig::from_env()?, session.clone())?;
//! let projects = client.get("projects").await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::return_self_not_must_use)]

// Re-exports of external dependencies
pub use serde;
pub use serde_json;

pub mod error;
pub mod http_client;
pub mod logging;
pub mod session;

pub use error::{Error, NetworkError, ParseError, Result};
pub use http_client::{
    ApiClient, ApiConfig, ApiConfigBuilder, ApiMethod, ApiRequest, HttpRequest, RawResponse,
    ReqwestTransport, Transport, normalize_error_message,
};
pub use session::{
    AccessToken, AuthEvent, NoSession, Session, SessionProvider, SessionStore, SessionUser,
    StaticToken,
};

/// Prelude module for convenient imports
///
/// ```rust
/// use voxel_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::http_client::{ApiClient, ApiConfig, ApiConfigBuilder};
    pub use crate::logging::{LogConfig, LogFormat, LogLevel, init_logging, try_init_logging};
    pub use crate::session::{
        AccessToken, AuthEvent, NoSession, Session, SessionProvider, SessionStore, SessionUser,
        StaticToken,
    };
    pub use serde::{Deserialize, Serialize};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
