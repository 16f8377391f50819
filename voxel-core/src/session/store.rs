//! Process-wide session state with an explicit init/subscribe lifecycle.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info};

use super::{AccessToken, SessionProvider};
use crate::error::{Error, Result};

/// The signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Identity provider user id (the token's `sub` claim)
    pub id: String,
    /// Email address, when the provider exposes one
    pub email: Option<String>,
}

/// An authenticated session: a token plus the user it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Bearer token for API calls
    pub access_token: AccessToken,
    /// User the token was issued to
    pub user: Option<SessionUser>,
}

impl Session {
    /// Creates a session for a token without user details.
    pub fn new(access_token: impl Into<AccessToken>) -> Self {
        Self {
            access_token: access_token.into(),
            user: None,
        }
    }

    /// Attaches the user the token was issued to.
    #[must_use]
    pub fn with_user(mut self, user: SessionUser) -> Self {
        self.user = Some(user);
        self
    }
}

/// Session changes reported by the identity provider.
#[derive(Debug, Clone)]
pub enum AuthEvent {
    /// A user signed in.
    SignedIn(Session),
    /// The provider refreshed the token of the current session.
    TokenRefreshed(Session),
    /// The provider updated the user of the current session.
    UserUpdated(Session),
    /// The user signed out.
    SignedOut,
}

impl AuthEvent {
    fn name(&self) -> &'static str {
        match self {
            AuthEvent::SignedIn(_) => "signed_in",
            AuthEvent::TokenRefreshed(_) => "token_refreshed",
            AuthEvent::UserUpdated(_) => "user_updated",
            AuthEvent::SignedOut => "signed_out",
        }
    }
}

/// Holds the current session and notifies subscribers when it changes.
///
/// The hosting application calls [`SessionStore::init`] exactly once with the
/// session it restored at startup, then forwards identity provider events
/// through [`SessionStore::apply`]. The store is also a [`SessionProvider`],
/// so it can be handed to the HTTP client directly.
///
/// ```rust
/// use voxel_core::session::{AuthEvent, Session, SessionStore, SessionUser};
///
/// # fn main() -> voxel_core::Result<()> {
/// let store = SessionStore::new();
/// store.init(None)?;
///
/// let mut changes = store.subscribe();
/// store.apply(AuthEvent::SignedIn(
///     Session::new("token").with_user(SessionUser { id: "u1".into(), email: None }),
/// ))?;
///
/// assert!(changes.has_changed().unwrap_or(false));
/// assert_eq!(store.current_user().map(|u| u.id), Some("u1".to_string()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SessionStore {
    state: watch::Sender<Option<Session>>,
    initialized: AtomicBool,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Creates an uninitialized store with no session.
    pub fn new() -> Self {
        let (state, _) = watch::channel(None);
        Self {
            state,
            initialized: AtomicBool::new(false),
        }
    }

    /// Seeds the store with the session restored at startup.
    ///
    /// Must be called exactly once; a second call fails with
    /// [`Error::Session`] and leaves the state untouched.
    pub fn init(&self, initial: Option<Session>) -> Result<()> {
        let signed_in = initial.is_some();
        // The flag flips under the channel lock, after the value is in place.
        let seeded = self.state.send_if_modified(|state| {
            if self.initialized.load(Ordering::Acquire) {
                return false;
            }
            *state = initial;
            self.initialized.store(true, Ordering::Release);
            true
        });

        if !seeded {
            return Err(Error::session("Session store is already initialized"));
        }
        info!(signed_in, "Session store initialized");
        Ok(())
    }

    /// Applies an identity provider event to the current session.
    pub fn apply(&self, event: AuthEvent) -> Result<()> {
        let name = event.name();
        let next = match event {
            AuthEvent::SignedIn(session)
            | AuthEvent::TokenRefreshed(session)
            | AuthEvent::UserUpdated(session) => Some(session),
            AuthEvent::SignedOut => None,
        };

        let applied = self.state.send_if_modified(|state| {
            if !self.initialized.load(Ordering::Acquire) {
                return false;
            }
            *state = next;
            true
        });

        if !applied {
            return Err(Error::session(
                "Session store must be initialized before applying auth events",
            ));
        }
        debug!(event = name, "Applied auth event");
        Ok(())
    }

    /// Returns a receiver that observes every session change.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.state.subscribe()
    }

    /// Returns a snapshot of the current session.
    pub fn current_session(&self) -> Option<Session> {
        self.state.borrow().clone()
    }

    /// Returns the signed-in user, if any.
    pub fn current_user(&self) -> Option<SessionUser> {
        self.state
            .borrow()
            .as_ref()
            .and_then(|session| session.user.clone())
    }

    /// Returns true once [`SessionStore::init`] has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }
}

#[async_trait]
impl SessionProvider for SessionStore {
    async fn current_token(&self) -> Option<AccessToken> {
        self.state
            .borrow()
            .as_ref()
            .map(|session| session.access_token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> SessionUser {
        SessionUser {
            id: id.to_string(),
            email: Some(format!("{id}@example.com")),
        }
    }

    #[test]
    fn test_init_only_once() {
        let store = SessionStore::new();
        assert!(!store.is_initialized());
        store.init(Some(Session::new("first"))).unwrap();
        assert!(store.is_initialized());

        let err = store.init(None).unwrap_err();
        assert!(matches!(err, Error::Session(_)));
        // the second init must not clobber the session
        assert!(store.current_session().is_some());
    }

    #[test]
    fn test_apply_before_init_fails() {
        let store = SessionStore::new();
        let err = store.apply(AuthEvent::SignedOut).unwrap_err();
        assert!(matches!(err, Error::Session(_)));
    }

    #[test]
    fn test_sign_in_and_out() {
        let store = SessionStore::new();
        store.init(None).unwrap();
        assert!(store.current_user().is_none());

        store
            .apply(AuthEvent::SignedIn(Session::new("t1").with_user(user("alice"))))
            .unwrap();
        assert_eq!(store.current_user(), Some(user("alice")));

        store.apply(AuthEvent::SignedOut).unwrap();
        assert!(store.current_session().is_none());
    }

    #[test]
    fn test_apply_racing_init_is_never_overwritten() {
        for _ in 0..200 {
            let store = SessionStore::new();
            std::thread::scope(|s| {
                let applier = s.spawn(|| {
                    while store
                        .apply(AuthEvent::SignedIn(Session::new("from-event")))
                        .is_err()
                    {
                        std::hint::spin_loop();
                    }
                });
                s.spawn(|| store.init(None).unwrap());
                applier.join().unwrap();
            });

            let session = store.current_session().expect("applied session was lost");
            assert_eq!(session.access_token.expose_secret(), "from-event");
        }
    }

    #[tokio::test]
    async fn test_provider_reads_latest_token() {
        let store = SessionStore::new();
        assert!(store.current_token().await.is_none());

        store.init(Some(Session::new("old"))).unwrap();
        assert_eq!(
            store.current_token().await.map(|t| t.expose_secret().to_string()),
            Some("old".to_string())
        );

        store
            .apply(AuthEvent::TokenRefreshed(Session::new("new")))
            .unwrap();
        assert_eq!(
            store.current_token().await.map(|t| t.expose_secret().to_string()),
            Some("new".to_string())
        );
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let store = SessionStore::new();
        store.init(None).unwrap();
        let mut rx = store.subscribe();

        store
            .apply(AuthEvent::UserUpdated(Session::new("t").with_user(user("bob"))))
            .unwrap();
        rx.changed().await.unwrap();
        let seen = rx.borrow_and_update().clone();
        assert_eq!(seen.and_then(|s| s.user), Some(user("bob")));

        store.apply(AuthEvent::SignedOut).unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_none());
    }
}
