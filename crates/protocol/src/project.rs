//! Project types for the kanri data model.
//!
//! Projects group tasks. A task references its project through a weak
//! `project_id` reference; deleting a project never deletes its tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a project.
///
/// Uses UUID v4 for globally unique identification.
pub type ProjectId = uuid::Uuid;

/// A project that tasks can belong to.
///
/// # Examples
///
/// ```
/// use kanri_protocol::Project;
///
/// let project = Project::new("Launch");
/// assert_eq!(project.name, "Launch");
/// assert!(project.description.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for this project.
    pub id: ProjectId,
    /// Name of the project. Never empty after trimming.
    pub name: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When this project was created.
    pub created_at: DateTime<Utc>,
    /// When this project was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project with the given name.
    ///
    /// Timestamps are set to the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::Project;
    ///
    /// let project = Project::new("Q3 roadmap");
    /// assert_eq!(project.name, "Q3 roadmap");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(ProjectId::new_v4(), name)
    }

    /// Creates a new project with a specific ID.
    ///
    /// Useful for testing or when recreating projects from persistent
    /// storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::{Project, ProjectId};
    ///
    /// let id = ProjectId::new_v4();
    /// let project = Project::with_id(id, "Launch");
    /// assert_eq!(project.id, id);
    /// ```
    #[must_use]
    pub fn with_id(id: ProjectId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Renames the project and refreshes the `updated_at` timestamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::Project;
    ///
    /// let mut project = Project::new("Launch");
    /// project.rename("Launch v2");
    /// assert_eq!(project.name, "Launch v2");
    /// ```
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_new_creates_with_defaults() {
        let project = Project::new("Test");

        assert_eq!(project.name, "Test");
        assert!(project.description.is_none());
        assert_eq!(project.created_at, project.updated_at);
    }

    #[test]
    fn project_with_id_preserves_id() {
        let id = ProjectId::new_v4();
        let project = Project::with_id(id, "Test");

        assert_eq!(project.id, id);
    }

    #[test]
    fn project_rename_updates_timestamp() {
        let mut project = Project::new("Test");
        let original_updated = project.updated_at;

        std::thread::sleep(std::time::Duration::from_millis(10));

        project.rename("Renamed");

        assert_eq!(project.name, "Renamed");
        assert!(project.updated_at > original_updated);
    }

    #[test]
    fn project_serialization_roundtrip() {
        let mut project = Project::new("Test project");
        project.description = Some("A description".to_string());

        let json = serde_json::to_string(&project).expect("serialize");
        let parsed: Project = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(project, parsed);
    }

    #[test]
    fn project_description_omitted_when_none() {
        let project = Project::new("Test");
        let json = serde_json::to_string(&project).expect("serialize");

        assert!(!json.contains("description"));
    }
}
