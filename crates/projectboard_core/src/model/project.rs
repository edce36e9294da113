//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record shared by the board store and views.
//! - Provide the status vocabulary used by drop zones and partitions.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - `status` is the only field that changes after creation, and only the
//!   board store mutates it.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every project record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = Uuid;

/// Stable string id for the active status.
pub const PROJECT_STATUS_ACTIVE: &str = "active";
/// Stable string id for the finished status.
pub const PROJECT_STATUS_FINISHED: &str = "finished";

/// Board partition a project belongs to.
///
/// Every project is in exactly one partition at any time; partitions are
/// derived by filtering on this field, never stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Freshly created, work not yet done.
    Active,
    /// Moved to the finished partition.
    Finished,
}

impl ProjectStatus {
    /// Stable string id used in element naming and wire payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => PROJECT_STATUS_ACTIVE,
            Self::Finished => PROJECT_STATUS_FINISHED,
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses one project status from its stable string id.
pub fn parse_project_status(value: &str) -> Option<ProjectStatus> {
    match value {
        PROJECT_STATUS_ACTIVE => Some(ProjectStatus::Active),
        PROJECT_STATUS_FINISHED => Some(ProjectStatus::Finished),
        _ => None,
    }
}

/// Canonical project record.
///
/// Construction goes through `Project::new` (or `Project::with_id` for
/// callers that already own an identity); the board store is the only
/// component that mutates a record after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable global ID used by drag payloads and subscriptions.
    pub id: ProjectId,
    /// Short human-readable name. Non-empty, enforced upstream.
    pub title: String,
    /// Free-form description. Non-empty, enforced upstream.
    pub description: String,
    /// Number of people assigned. Positive and bounded, enforced upstream.
    pub people: u32,
    /// Board partition this record currently belongs to.
    pub status: ProjectStatus,
}

/// Identity errors raised by explicit-id construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectIdentityError {
    /// The nil UUID can never identify a project.
    NilId,
}

impl Display for ProjectIdentityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "project id must not be the nil uuid"),
        }
    }
}

impl Error for ProjectIdentityError {}

impl Project {
    /// Creates a new project with a generated stable ID and `Active` status.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Creates a project with a caller-provided stable ID.
    ///
    /// Used by test fixtures and import-like callers where identity already
    /// exists externally. The provided `id` must remain stable for this
    /// record's lifetime.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Result<Self, ProjectIdentityError> {
        if id.is_nil() {
            return Err(ProjectIdentityError::NilId);
        }
        Ok(Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        })
    }

    /// Returns whether this record belongs to the given partition.
    pub fn is_in(&self, status: ProjectStatus) -> bool {
        self.status == status
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_project_status, Project, ProjectIdentityError, ProjectStatus};
    use uuid::Uuid;

    #[test]
    fn status_string_ids_round_trip() {
        assert_eq!(ProjectStatus::Active.as_str(), "active");
        assert_eq!(ProjectStatus::Finished.as_str(), "finished");
        assert_eq!(parse_project_status("active"), Some(ProjectStatus::Active));
        assert_eq!(
            parse_project_status("finished"),
            Some(ProjectStatus::Finished)
        );
        assert_eq!(parse_project_status("archived"), None);
        assert_eq!(parse_project_status("Active"), None);
    }

    #[test]
    fn with_id_rejects_nil_uuid() {
        let err = Project::with_id(Uuid::nil(), "t", "d", 1).unwrap_err();
        assert_eq!(err, ProjectIdentityError::NilId);
    }
}
