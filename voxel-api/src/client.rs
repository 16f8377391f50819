//! Entry point for the typed API.

use voxel_core::{ApiClient, ApiConfig, Error, Result, SessionProvider};

use crate::files::FilesApi;
use crate::projects::ProjectsApi;

/// Typed access to the Voxel backend.
///
/// ```rust,no_run
/// use voxel_api::VoxelApi;
/// use voxel_core::{ApiConfig, StaticToken};
///
/// # async fn example() -> voxel_core::Result<()> {
/// let api = VoxelApi::new(ApiConfig::default(), StaticToken::new("token"))?;
/// for project in api.projects().list().await? {
///     println!("{} ({})", project.name, project.file_name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct VoxelApi {
    client: ApiClient,
}

impl VoxelApi {
    /// Creates the API on a new `reqwest`-backed client.
    pub fn new(config: ApiConfig, session: impl SessionProvider + 'static) -> Result<Self> {
        Ok(Self::from_client(ApiClient::new(config, session)?))
    }

    /// Wraps an existing client.
    pub fn from_client(client: ApiClient) -> Self {
        Self { client }
    }

    /// The underlying untyped client.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Project endpoints.
    pub fn projects(&self) -> ProjectsApi<'_> {
        ProjectsApi::new(&self.client)
    }

    /// File endpoints.
    pub fn files(&self) -> FilesApi<'_> {
        FilesApi::new(&self.client)
    }
}

/// Checks that an id can be used as a single path segment.
pub(crate) fn path_segment<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(Error::invalid_request(format!("{name} must not be empty")));
    }
    if value.contains(['/', '?', '#']) {
        return Err(Error::invalid_request(format!(
            "{name} contains a reserved URL character: {value}"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segment() {
        assert_eq!(path_segment("id", "abc-123").unwrap(), "abc-123");
        assert!(path_segment("id", "").is_err());
        assert!(path_segment("id", "a/b").is_err());
        assert!(path_segment("id", "a?b=1").is_err());
    }
}
