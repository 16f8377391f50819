//! Request and response models for the Voxel backend.

mod file;
mod project;
mod share;

pub use file::{FileUploadRequest, UploadUrl};
pub use project::{OwnerType, Project, ProjectCreate, ProjectUpdate};
pub use share::{Permission, ProjectShare, ProjectShareRecord, ShareResult, ShareTarget};
