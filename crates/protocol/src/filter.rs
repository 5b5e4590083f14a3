//! The task filter predicate engine.
//!
//! A [`TaskFilter`] is a partial-match predicate over task fields: each
//! field that is present must be equal on the task, and each absent field
//! matches any value. The default filter matches everything.

use serde::{Deserialize, Serialize};

use crate::project::ProjectId;
use crate::task::{Task, TaskPriority, TaskStatus};

/// A partial-match predicate over task fields.
///
/// An absent field means "match any value for that field", not "match
/// empty". Filtering is a pure O(n) scan re-run on every store or filter
/// change; there is no index.
///
/// # Examples
///
/// ```
/// use kanri_protocol::{Task, TaskFilter, TaskStatus};
///
/// let mut task = Task::new("Ship it");
/// task.status = TaskStatus::Done;
///
/// // The default filter matches everything.
/// assert!(TaskFilter::default().matches(&task));
///
/// let filter = TaskFilter {
///     status: Some(TaskStatus::Done),
///     ..Default::default()
/// };
/// assert!(filter.matches(&task));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskFilter {
    /// Match only tasks with this status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// Match only tasks with this priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    /// Match only tasks belonging to this project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    /// Match only tasks assigned to this label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

impl TaskFilter {
    /// Returns `true` if no field is constrained (the filter matches every
    /// task).
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::{TaskFilter, TaskStatus};
    ///
    /// assert!(TaskFilter::default().is_match_all());
    ///
    /// let filter = TaskFilter {
    ///     status: Some(TaskStatus::Todo),
    ///     ..Default::default()
    /// };
    /// assert!(!filter.is_match_all());
    /// ```
    #[must_use]
    pub fn is_match_all(&self) -> bool {
        self.status.is_none()
            && self.priority.is_none()
            && self.project_id.is_none()
            && self.assigned_to.is_none()
    }

    /// Returns `true` if the task satisfies every present field of this
    /// filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::{Task, TaskFilter, TaskPriority};
    ///
    /// let mut task = Task::new("Review PR");
    /// task.priority = TaskPriority::High;
    ///
    /// let filter = TaskFilter {
    ///     priority: Some(TaskPriority::High),
    ///     ..Default::default()
    /// };
    /// assert!(filter.matches(&task));
    ///
    /// let filter = TaskFilter {
    ///     priority: Some(TaskPriority::Low),
    ///     ..Default::default()
    /// };
    /// assert!(!filter.matches(&task));
    /// ```
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if self.status.is_some_and(|status| task.status != status) {
            return false;
        }
        if self.priority.is_some_and(|priority| task.priority != priority) {
            return false;
        }
        if self
            .project_id
            .is_some_and(|project| task.project_id != Some(project))
        {
            return false;
        }
        if self
            .assigned_to
            .as_deref()
            .is_some_and(|assignee| task.assigned_to.as_deref() != Some(assignee))
        {
            return false;
        }
        true
    }
}

/// Returns the lazily-evaluated subsequence of tasks matching the filter.
///
/// The relative order of the input is preserved (stable filter, no
/// reordering).
///
/// # Examples
///
/// ```
/// use kanri_protocol::{filter_tasks, Task, TaskFilter, TaskStatus};
///
/// let mut done = Task::new("Done task");
/// done.status = TaskStatus::Done;
/// let tasks = vec![Task::new("Open task"), done];
///
/// let filter = TaskFilter {
///     status: Some(TaskStatus::Done),
///     ..Default::default()
/// };
/// let matched: Vec<_> = filter_tasks(&tasks, &filter).collect();
/// assert_eq!(matched.len(), 1);
/// assert_eq!(matched[0].title, "Done task");
/// ```
pub fn filter_tasks<'a>(
    tasks: &'a [Task],
    filter: &'a TaskFilter,
) -> impl Iterator<Item = &'a Task> + 'a {
    tasks.iter().filter(move |task| filter.matches(task))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<Task> {
        let mut review = Task::new("Review PR");
        review.status = TaskStatus::InProgress;
        review.priority = TaskPriority::High;
        review.assigned_to = Some("alex".to_string());

        let mut ship = Task::new("Ship release");
        ship.status = TaskStatus::Done;
        ship.priority = TaskPriority::High;

        let mut triage = Task::new("Triage bugs");
        triage.status = TaskStatus::Todo;
        triage.priority = TaskPriority::Low;
        triage.assigned_to = Some("sam".to_string());

        vec![review, ship, triage]
    }

    #[test]
    fn default_filter_matches_everything() {
        let tasks = sample_tasks();
        let filter = TaskFilter::default();

        let matched: Vec<_> = filter_tasks(&tasks, &filter).collect();
        assert_eq!(matched.len(), tasks.len());
        // Identity filter preserves the original order
        for (original, filtered) in tasks.iter().zip(&matched) {
            assert_eq!(original.id, filtered.id);
        }
    }

    #[test]
    fn status_filter_selects_subsequence() {
        let tasks = sample_tasks();
        let filter = TaskFilter {
            status: Some(TaskStatus::Done),
            ..Default::default()
        };

        let matched: Vec<_> = filter_tasks(&tasks, &filter).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Ship release");
    }

    #[test]
    fn filter_fields_combine_with_and() {
        let tasks = sample_tasks();
        let filter = TaskFilter {
            status: Some(TaskStatus::InProgress),
            priority: Some(TaskPriority::High),
            ..Default::default()
        };

        let matched: Vec<_> = filter_tasks(&tasks, &filter).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Review PR");

        // Same status but wrong priority matches nothing
        let filter = TaskFilter {
            status: Some(TaskStatus::InProgress),
            priority: Some(TaskPriority::Low),
            ..Default::default()
        };
        assert_eq!(filter_tasks(&tasks, &filter).count(), 0);
    }

    #[test]
    fn project_filter_requires_exact_reference() {
        let project = ProjectId::new_v4();
        let mut tasks = sample_tasks();
        tasks[0].project_id = Some(project);

        let filter = TaskFilter {
            project_id: Some(project),
            ..Default::default()
        };
        let matched: Vec<_> = filter_tasks(&tasks, &filter).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, tasks[0].id);

        // Tasks with no project do not match a project filter
        let filter = TaskFilter {
            project_id: Some(ProjectId::new_v4()),
            ..Default::default()
        };
        assert_eq!(filter_tasks(&tasks, &filter).count(), 0);
    }

    #[test]
    fn assignee_filter_matches_label() {
        let tasks = sample_tasks();
        let filter = TaskFilter {
            assigned_to: Some("sam".to_string()),
            ..Default::default()
        };

        let matched: Vec<_> = filter_tasks(&tasks, &filter).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Triage bugs");
    }

    #[test]
    fn absent_assignee_does_not_match_unassigned() {
        // A present filter field must be equal; an unassigned task never
        // matches an assignee filter.
        let mut task = Task::new("Orphan");
        task.assigned_to = None;

        let filter = TaskFilter {
            assigned_to: Some("alex".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&task));
    }

    #[test]
    fn is_match_all_detection() {
        assert!(TaskFilter::default().is_match_all());

        let filter = TaskFilter {
            assigned_to: Some("alex".to_string()),
            ..Default::default()
        };
        assert!(!filter.is_match_all());
    }

    #[test]
    fn filter_serialization_roundtrip() {
        let filter = TaskFilter {
            status: Some(TaskStatus::Todo),
            priority: Some(TaskPriority::High),
            project_id: Some(ProjectId::new_v4()),
            assigned_to: Some("alex".to_string()),
        };

        let json = serde_json::to_string(&filter).expect("serialize");
        let parsed: TaskFilter = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(filter, parsed);
    }

    #[test]
    fn empty_filter_serializes_to_empty_object() {
        let json = serde_json::to_string(&TaskFilter::default()).expect("serialize");
        assert_eq!(json, "{}");
    }
}
