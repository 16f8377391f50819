//! Session providers.
//!
//! The HTTP client never owns credentials. On every call it asks a
//! [`SessionProvider`] for the current access token and attaches it as a
//! bearer header when one is available. Token issuance and refresh belong to
//! the identity provider; this module only describes how the client reads
//! the result.
//!
//! Implementations shipped here:
//!
//! - [`SessionStore`]: process-wide session state fed by auth events, with
//!   change notifications.
//! - [`StaticToken`]: a fixed token, handy for scripts and service accounts.
//! - [`NoSession`]: anonymous access.

mod store;
mod token;

pub use store::{AuthEvent, Session, SessionStore, SessionUser};
pub use token::AccessToken;

use async_trait::async_trait;
use std::sync::Arc;

/// Source of the current bearer token.
///
/// Absence of a session is a valid answer, not an error: the client then
/// sends the request without an `Authorization` header.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Returns the token to use for the next request, if any.
    async fn current_token(&self) -> Option<AccessToken>;
}

#[async_trait]
impl<T: SessionProvider + ?Sized> SessionProvider for Arc<T> {
    async fn current_token(&self) -> Option<AccessToken> {
        (**self).current_token().await
    }
}

/// Provider for anonymous access: never yields a token.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSession;

#[async_trait]
impl SessionProvider for NoSession {
    async fn current_token(&self) -> Option<AccessToken> {
        None
    }
}

/// Provider that always yields the same token.
#[derive(Debug, Clone)]
pub struct StaticToken(AccessToken);

impl StaticToken {
    /// Creates a provider for a fixed token.
    pub fn new(token: impl Into<AccessToken>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl SessionProvider for StaticToken {
    async fn current_token(&self) -> Option<AccessToken> {
        Some(self.0.clone())
    }
}
