//! Authenticated HTTP client.
//!
//! Sends JSON requests to `<base-url>/<path>` with:
//! - `Content-Type: application/json` on every request
//! - `Authorization: Bearer <token>` whenever the session provider has a token
//! - non-2xx responses normalized into [`Error::Api`](crate::error::Error::Api)
//! - 204 on PUT/DELETE returned as `null`
//!
//! # Example
//!
//! ```rust,no_run
//! use voxel_core::http_client::{ApiClient, ApiConfig};
//! use voxel_core::session::StaticToken;
//!
//! # async fn example() -> voxel_core::Result<()> {
//! let client = ApiClient::new(ApiConfig::default(), StaticToken::new("token"))?;
//!
//! let projects = client.get("projects").await?;
//! let created = client.post("projects", &serde_json::json!({"name": "Tower"})).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Nothing here retries, caches sessions, or enforces a timeout unless
//! [`ApiConfig::timeout`] is set.

mod builder;
mod config;
mod error_message;
mod headers;
mod request;
mod response;
mod transport;


pub use builder::ApiClient;
pub use config::{
    ApiConfig, ApiConfigBuilder, DEFAULT_BASE_URL, DEFAULT_MAX_RESPONSE_SIZE, FALLBACK_BASE_URL,
};
pub use error_message::{EXTRACTION_ORDER, ErrorResponse, MessageSource, normalize_error_message};
pub use headers::build_headers;
pub use request::{ApiMethod, ApiRequest};
pub use transport::{HttpRequest, RawResponse, ReqwestTransport, Transport};
