//! Typed endpoints for the Voxel backend.
//!
//! Built on [`voxel_core::ApiClient`]: every call carries the session's bearer
//! token, and failures surface as [`voxel_core::Error`] with the backend's
//! `detail` message.
//!
//! # Example
//!
//! ```rust,no_run
//! use voxel_api::prelude::*;
//! use voxel_core::{ApiConfig, StaticToken};
//!
//! # async fn example() -> voxel_core::Result<()> {
//! let api = VoxelApi::new(ApiConfig::from_env()?, StaticToken::new("token"))?;
//!
//! let upload = api
//!     .files()
//!     .create_upload_url(&FileUploadRequest::new("tower.ifc", "application/x-step"))
//!     .await?;
//!
//! let project = api
//!     .projects()
//!     .create(&ProjectCreate::new("Tower", "public/tower.ifc", "tower.ifc", OwnerType::User))
//!     .await?;
//!
//! api.projects()
//!     .share(
//!         &project.id,
//!         &ProjectShare::new(&project.id, ShareTarget::Team, "team-42")
//!             .with_permission(Permission::Write),
//!     )
//!     .await?;
//! # let _ = upload;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

mod client;
pub mod files;
pub mod projects;
pub mod types;

pub use client::VoxelApi;
pub use files::FilesApi;
pub use projects::ProjectsApi;
pub use types::{
    FileUploadRequest, OwnerType, Permission, Project, ProjectCreate, ProjectShare,
    ProjectShareRecord, ProjectUpdate, ShareResult, ShareTarget, UploadUrl,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::client::VoxelApi;
    pub use crate::types::{
        FileUploadRequest, OwnerType, Permission, Project, ProjectCreate, ProjectShare,
        ProjectShareRecord, ProjectUpdate, ShareResult, ShareTarget, UploadUrl,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
