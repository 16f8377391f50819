//! File upload endpoints.

use tracing::instrument;
use voxel_core::{ApiClient, Error, Result};

use crate::types::{FileUploadRequest, UploadUrl};

/// File operations, borrowed from a [`VoxelApi`](crate::VoxelApi).
#[derive(Debug, Clone, Copy)]
pub struct FilesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> FilesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Requests a signed URL for uploading a model file.
    ///
    /// The URL is valid for one hour and overwrites an existing object of
    /// the same name.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_upload_url(&self, request: &FileUploadRequest) -> Result<UploadUrl> {
        if request.name.is_empty() {
            return Err(Error::invalid_request("file name must not be empty"));
        }
        self.client.post_as("files/upload-url", request).await
    }
}
