//! Sign-in to sign-out flow through the facade crate.

use serde_json::json;
use std::sync::Arc;
use voxel_client::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_session_lifecycle_drives_authorization() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(header("authorization", "Bearer signed-in"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Not authenticated"})),
        )
        .mount(&server)
        .await;

    let store = Arc::new(SessionStore::new());
    store.init(None)?;
    let mut changes = store.subscribe();

    let api = VoxelApi::new(
        ApiConfig::builder().base_url(server.uri()).build(),
        store.clone(),
    )?;

    store.apply(AuthEvent::SignedIn(Session::new("signed-in").with_user(
        SessionUser {
            id: "user-1".into(),
            email: Some("ada@example.com".into()),
        },
    )))?;
    assert!(changes.has_changed()?);
    assert_eq!(
        changes.borrow_and_update().as_ref().and_then(|s| s.user.clone()).map(|u| u.id),
        Some("user-1".to_string())
    );

    assert!(api.projects().list().await?.is_empty());

    store.apply(AuthEvent::SignedOut)?;
    assert!(store.current_user().is_none());

    let err = api.projects().list().await.unwrap_err();
    assert_eq!(err.to_string(), "Not authenticated");
    assert!(err.is_unauthorized());
    Ok(())
}

#[tokio::test]
async fn test_apply_before_init_is_rejected() {
    let store = SessionStore::new();
    let err = store.apply(AuthEvent::SignedOut).unwrap_err();
    assert!(matches!(err, Error::Session(_)));
    assert!(!store.is_initialized());
}

#[tokio::test]
async fn test_untyped_client_is_reachable_from_typed_api() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let api = VoxelApi::new(
        ApiConfig::builder().base_url(server.uri()).build(),
        NoSession,
    )?;

    assert_eq!(api.client().get("health").await?, json!({"ok": true}));
    Ok(())
}
