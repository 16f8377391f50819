//! Project endpoints.
//!
//! - CRUD on `projects` and `projects/{id}`
//! - sharing under `projects/{id}/share` and `projects/{id}/shares`
//!
//! Access control is enforced by the backend; a caller without access gets
//! [`Error::Api`](voxel_core::Error::Api) with status 403 or 404.

mod shares;

use tracing::{debug, instrument};
use voxel_core::{ApiClient, Result};

use crate::client::path_segment;
use crate::types::{Project, ProjectCreate, ProjectUpdate};

const RESOURCE: &str = "projects";

/// Project operations, borrowed from a [`VoxelApi`](crate::VoxelApi).
#[derive(Debug, Clone, Copy)]
pub struct ProjectsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProjectsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    fn project_path(id: &str) -> Result<String> {
        Ok(format!("{RESOURCE}/{}", path_segment("project id", id)?))
    }

    /// Lists every project the caller can access, most recently updated first.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Project>> {
        let projects: Vec<Project> = self.client.get_as(RESOURCE).await?;
        debug!(count = projects.len(), "Listed projects");
        Ok(projects)
    }

    /// Fetches one project.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Project> {
        self.client.get_as(&Self::project_path(id)?).await
    }

    /// Creates a project. The backend answers 201 with the stored project.
    ///
    /// # Errors
    ///
    /// Fails locally, without a request, when a team or company owner has no
    /// `owner_id`.
    #[instrument(skip(self, project), fields(name = %project.name, owner_type = %project.owner_type))]
    pub async fn create(&self, project: &ProjectCreate) -> Result<Project> {
        project.validate()?;
        let created: Project = self.client.post_as(RESOURCE, project).await?;
        debug!(id = %created.id, "Created project");
        Ok(created)
    }

    /// Applies a partial update and returns the updated project.
    #[instrument(skip(self, update))]
    pub async fn update(&self, id: &str, update: &ProjectUpdate) -> Result<Project> {
        if update.is_empty() {
            debug!("Sending empty project update");
        }
        self.client.put_as(&Self::project_path(id)?, update).await
    }

    /// Deletes a project. Only owners may delete; deleting an id that does
    /// not exist also succeeds.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&Self::project_path(id)?).await?;
        Ok(())
    }
}
