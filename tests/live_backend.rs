//! Tests against a running backend.
//!
//! Disabled unless `VOXEL_ENABLE_INTEGRATION_TESTS=true`. Set
//! `VOXEL_API_URL` and `VOXEL_ACCESS_TOKEN` to point them at a deployment.

use voxel_client::skip_if;
use voxel_client::test_config::TestConfig;
use voxel_client::{ApiClient, VoxelApi};

fn load_config() -> TestConfig {
    let config = TestConfig::from_env().unwrap_or_default();
    config.init_logging();
    config
}

#[tokio::test]
async fn test_list_projects_live() {
    let config = load_config();
    skip_if!(
        config.should_skip_integration_tests(),
        "Integration tests disabled"
    );
    skip_if!(!config.has_access_token(), "VOXEL_ACCESS_TOKEN not set");

    let client =
        ApiClient::new(config.api_config(), config.session()).expect("Failed to create client");
    let api = VoxelApi::from_client(client);

    let projects = api.projects().list().await.expect("list projects");
    for project in &projects {
        assert!(!project.id.is_empty());
    }
}

#[tokio::test]
async fn test_anonymous_list_is_rejected_live() {
    let config = load_config();
    skip_if!(
        config.should_skip_integration_tests(),
        "Integration tests disabled"
    );

    let api = VoxelApi::new(config.api_config(), voxel_client::NoSession)
        .expect("Failed to create API");

    let err = api.projects().list().await.unwrap_err();
    assert!(err.is_unauthorized(), "unexpected error: {err}");
}
