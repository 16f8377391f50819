//! Project type definitions
//!
//! A project is one uploaded BIM model plus its metadata. It is owned by
//! exactly one principal: a user, a team or a company.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use voxel_core::{Error, Result};

/// Kind of principal that owns a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerType {
    /// An individual user; the backend takes the id from the session
    User,
    /// A team the caller belongs to
    Team,
    /// A company the caller belongs to
    Company,
}

impl OwnerType {
    /// Returns true if the owner id has to be sent explicitly.
    pub fn requires_id(self) -> bool {
        !matches!(self, OwnerType::User)
    }
}

impl std::fmt::Display for OwnerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Team => write!(f, "team"),
            Self::Company => write!(f, "company"),
        }
    }
}

/// A project as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project id (UUID)
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Storage path of the model file
    pub file_path: String,
    /// Original file name
    pub file_name: String,
    /// File size in bytes
    #[serde(default)]
    pub file_size: Option<u64>,
    /// File type, e.g. `ifc`
    #[serde(default)]
    pub file_type: Option<String>,
    /// Owning user, when owned by a user
    #[serde(default)]
    pub owner_user_id: Option<String>,
    /// Owning team, when owned by a team
    #[serde(default)]
    pub owner_team_id: Option<String>,
    /// Owning company, when owned by a company
    #[serde(default)]
    pub owner_company_id: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
    /// Tags
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl Project {
    /// Returns the owner kind and id.
    pub fn owner(&self) -> Option<(OwnerType, &str)> {
        [
            (OwnerType::User, &self.owner_user_id),
            (OwnerType::Team, &self.owner_team_id),
            (OwnerType::Company, &self.owner_company_id),
        ]
        .into_iter()
        .find_map(|(kind, id)| id.as_deref().map(|id| (kind, id)))
    }
}

/// Payload for creating a project.
///
/// ```rust
/// use voxel_api::types::{OwnerType, ProjectCreate};
///
/// let create = ProjectCreate::new("Tower A", "public/tower.ifc", "tower.ifc", OwnerType::User)
///     .with_tags(vec!["structural".into()]);
/// assert!(create.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCreate {
    /// Display name
    pub name: String,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Storage path of the uploaded model file
    pub file_path: String,
    /// Original file name
    pub file_name: String,
    /// File size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    /// File type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    /// Kind of owner
    pub owner_type: OwnerType,
    /// Team or company id; ignored for user-owned projects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    /// Tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ProjectCreate {
    /// Creates a payload with the required fields.
    pub fn new(
        name: impl Into<String>,
        file_path: impl Into<String>,
        file_name: impl Into<String>,
        owner_type: OwnerType,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            file_path: file_path.into(),
            file_name: file_name.into(),
            file_size: None,
            file_type: None,
            owner_type,
            owner_id: None,
            tags: None,
        }
    }

    /// Sets the team or company id.
    pub fn with_owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets file size and type.
    pub fn with_file_info(mut self, size: u64, file_type: impl Into<String>) -> Self {
        self.file_size = Some(size);
        self.file_type = Some(file_type.into());
        self
    }

    /// Sets the tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Checks the payload before it is sent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] when a team or company owner has no
    /// (or an empty) `owner_id`.
    pub fn validate(&self) -> Result<()> {
        if self.owner_type.requires_id() && self.owner_id.as_deref().is_none_or(str::is_empty) {
            return Err(Error::invalid_request(format!(
                "owner_id is required when owner_type is '{}'",
                self.owner_type
            )));
        }
        Ok(())
    }
}

/// Partial update of a project. Fields left as `None` are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement tag list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ProjectUpdate {
    /// Returns true if no field would change.
    ///
    /// An empty update is still sent; the backend answers with the project
    /// unchanged.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.tags.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_owner_requires_id() {
        let create = ProjectCreate::new("A", "p", "f.ifc", OwnerType::Team);
        assert!(matches!(create.validate(), Err(Error::InvalidRequest(_))));

        let blank = create.clone().with_owner_id("");
        assert!(blank.validate().is_err());

        assert!(create.with_owner_id("team-1").validate().is_ok());
    }

    #[test]
    fn test_user_owner_needs_no_id() {
        let create = ProjectCreate::new("A", "p", "f.ifc", OwnerType::User);
        assert!(create.validate().is_ok());
    }

    #[test]
    fn test_create_omits_unset_fields() {
        let create = ProjectCreate::new("A", "public/a.ifc", "a.ifc", OwnerType::Company)
            .with_owner_id("c-1");
        let value = serde_json::to_value(&create).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "A",
                "file_path": "public/a.ifc",
                "file_name": "a.ifc",
                "owner_type": "company",
                "owner_id": "c-1"
            })
        );
    }

    #[test]
    fn test_empty_update_serializes_to_empty_object() {
        let update = ProjectUpdate::default();
        assert!(update.is_empty());
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({}));
    }

    #[test]
    fn test_project_owner_resolution() {
        let project: Project = serde_json::from_value(json!({
            "id": "p1",
            "name": "Tower",
            "description": null,
            "file_path": "public/tower.ifc",
            "file_name": "tower.ifc",
            "file_size": 1024,
            "file_type": "ifc",
            "owner_user_id": null,
            "owner_team_id": "t1",
            "owner_company_id": null,
            "created_at": "2024-05-01T10:00:00+00:00",
            "updated_at": "2024-05-02T10:00:00.123456+00:00",
            "tags": ["a"]
        }))
        .unwrap();

        assert_eq!(project.owner(), Some((OwnerType::Team, "t1")));
        assert_eq!(project.file_size, Some(1024));
    }
}
