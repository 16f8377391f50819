//! Project sharing. Only project owners may share, unshare or list shares.

use serde::Deserialize;
use tracing::{debug, instrument};
use voxel_core::{Error, Result};

use super::ProjectsApi;
use crate::client::path_segment;
use crate::types::{ProjectShare, ProjectShareRecord, ShareResult};

#[derive(Deserialize)]
struct SharesEnvelope {
    shares: Vec<ProjectShareRecord>,
}

impl ProjectsApi<'_> {
    /// Shares a project with a user, team or company.
    ///
    /// # Errors
    ///
    /// Fails locally when `share.project_id` names a different project.
    #[instrument(
        skip(self, share),
        fields(target = %share.share_with_type, permission = ?share.permission)
    )]
    pub async fn share(&self, id: &str, share: &ProjectShare) -> Result<ShareResult> {
        if share.project_id != id {
            return Err(Error::invalid_request(format!(
                "share is for project {}, not {id}",
                share.project_id
            )));
        }
        let path = format!("{}/share", Self::project_path(id)?);
        let result: ShareResult = self.client.post_as(&path, share).await?;
        debug!(share_id = %result.share.id, "Shared project");
        Ok(result)
    }

    /// Removes a share.
    #[instrument(skip(self))]
    pub async fn unshare(&self, id: &str, share_id: &str) -> Result<()> {
        let path = format!(
            "{}/share/{}",
            Self::project_path(id)?,
            path_segment("share id", share_id)?
        );
        self.client.delete(&path).await?;
        Ok(())
    }

    /// Lists the shares of a project.
    #[instrument(skip(self))]
    pub async fn shares(&self, id: &str) -> Result<Vec<ProjectShareRecord>> {
        let path = format!("{}/shares", Self::project_path(id)?);
        let envelope: SharesEnvelope = self.client.get_as(&path).await?;
        Ok(envelope.shares)
    }
}
