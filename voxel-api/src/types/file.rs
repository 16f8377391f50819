use serde::{Deserialize, Serialize};

/// Request for a signed upload URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUploadRequest {
    /// File name; the object is stored under `public/<name>`
    pub name: String,
    /// MIME type of the file, e.g. `application/x-step`
    pub content_type: String,
}

impl FileUploadRequest {
    /// Creates an upload request.
    pub fn new(name: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
        }
    }
}

/// A pre-signed URL the client can upload the file body to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadUrl {
    /// Signed storage URL
    pub signed_url: String,
}
