//! Project sharing models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::OwnerType;

/// Kind of principal a project is shared with.
///
/// Same set of principals that can own a project.
pub type ShareTarget = OwnerType;

/// Access level granted by a share.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    /// View only
    #[default]
    Read,
    /// View and edit
    Write,
    /// Edit and manage shares
    Admin,
}

/// Payload for sharing a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectShare {
    /// Project being shared
    pub project_id: String,
    /// Kind of principal receiving access
    pub share_with_type: ShareTarget,
    /// Id of that principal
    pub share_with_id: String,
    /// Granted access level
    #[serde(default)]
    pub permission: Permission,
    /// When the share stops granting access
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl ProjectShare {
    /// Creates a read-only, non-expiring share.
    pub fn new(
        project_id: impl Into<String>,
        share_with_type: ShareTarget,
        share_with_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            share_with_type,
            share_with_id: share_with_id.into(),
            permission: Permission::default(),
            expires_at: None,
        }
    }

    /// Sets the access level.
    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permission = permission;
        self
    }

    /// Sets the expiry time.
    pub fn expires_at(mut self, at: DateTime<Utc>) -> Self {
        self.expires_at = Some(at);
        self
    }
}

/// A stored share row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectShareRecord {
    /// Share id
    pub id: String,
    /// Shared project
    pub project_id: String,
    /// Granted access level
    #[serde(default)]
    pub permission: Permission,
    /// User who created the share
    #[serde(default)]
    pub shared_by_user_id: Option<String>,
    /// Receiving user
    #[serde(default)]
    pub shared_with_user_id: Option<String>,
    /// Receiving team
    #[serde(default)]
    pub shared_with_team_id: Option<String>,
    /// Receiving company
    #[serde(default)]
    pub shared_with_company_id: Option<String>,
    /// Expiry time
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ProjectShareRecord {
    /// Returns who the project is shared with.
    pub fn target(&self) -> Option<(ShareTarget, &str)> {
        [
            (ShareTarget::User, &self.shared_with_user_id),
            (ShareTarget::Team, &self.shared_with_team_id),
            (ShareTarget::Company, &self.shared_with_company_id),
        ]
        .into_iter()
        .find_map(|(kind, id)| id.as_deref().map(|id| (kind, id)))
    }

    /// Returns true if the share has an expiry time at or before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// Response to a successful share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareResult {
    /// Confirmation message
    pub message: String,
    /// The created share
    pub share: ProjectShareRecord,
}
