//! # Voxel Client
//!
//! Authenticated JSON client for the Voxel BIM backend.
//!
//! ## Features
//!
//! - **Session-aware**: the current access token is attached to every request
//! - **Normalized errors**: one readable message per failed response
//! - **Typed endpoints**: projects, sharing and file uploads
//! - **Async/Await**: built on tokio and reqwest
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use voxel_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     init_logging(&LogConfig::default());
//!
//!     let session = std::sync::Arc::new(SessionStore::new());
//!     session.init(Some(Session::new("eyJhbGciOi...")))?;
//!
//!     let api = VoxelApi::new(ApiConfig::from_env()?, session.clone())?;
//!     for project in api.projects().list().await? {
//!         println!("{}", project.name);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// Re-export core types
pub use voxel_core::{
    AccessToken, ApiClient, ApiConfig, AuthEvent, NoSession, Session, SessionProvider,
    SessionStore, SessionUser, StaticToken,
    error::{Error, Result},
};

// Re-export typed endpoints
pub use voxel_api::{FilesApi, ProjectsApi, VoxelApi, types::*};

// Test configuration module (test builds and debug builds)
#[cfg(any(test, feature = "test-utils", debug_assertions))]
pub mod test_config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use voxel_api::prelude::*;
    pub use voxel_core::prelude::*;
}
