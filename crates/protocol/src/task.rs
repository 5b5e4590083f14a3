//! Task types for the kanri data model.
//!
//! This module defines the core task types used throughout the kanri
//! application: task identifiers, workflow statuses, priorities, and the
//! task structure itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::project::ProjectId;

/// Unique identifier for a task.
///
/// Uses UUID v4 for globally unique identification.
pub type TaskId = uuid::Uuid;

/// The workflow status of a task.
///
/// A task is always in exactly one status; the three statuses are the three
/// lanes of the Kanban board. Every status is reachable from every other
/// status in a single move.
///
/// # Examples
///
/// ```
/// use kanri_protocol::TaskStatus;
///
/// let status = TaskStatus::InProgress;
/// assert_eq!(status.display_name(), "In Progress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has not been started.
    #[default]
    Todo,
    /// Task is currently being worked on.
    InProgress,
    /// Task is finished.
    Done,
}

impl TaskStatus {
    /// Returns all statuses in lane order.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::TaskStatus;
    ///
    /// let all = TaskStatus::all();
    /// assert_eq!(all.len(), 3);
    /// assert_eq!(all[0], TaskStatus::Todo);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Todo, Self::InProgress, Self::Done]
    }

    /// Returns a human-readable display name for the status.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Todo.display_name(), "To Do");
    /// assert_eq!(TaskStatus::Done.display_name(), "Done");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns the index of this status in lane order (0-2).
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Todo.index(), 0);
    /// assert_eq!(TaskStatus::Done.index(), 2);
    /// ```
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Creates a `TaskStatus` from its lane index.
    ///
    /// Returns `None` if the index is out of range (>= 3).
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::from_index(0), Some(TaskStatus::Todo));
    /// assert_eq!(TaskStatus::from_index(3), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Todo),
            1 => Some(Self::InProgress),
            2 => Some(Self::Done),
            _ => None,
        }
    }

    /// Returns the next status in lane order, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Todo.next(), Some(TaskStatus::InProgress));
    /// assert_eq!(TaskStatus::Done.next(), None);
    /// ```
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Returns the previous status in lane order, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::InProgress.previous(), Some(TaskStatus::Todo));
    /// assert_eq!(TaskStatus::Todo.previous(), None);
    /// ```
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self.index().checked_sub(1) {
            Some(idx) => Self::from_index(idx),
            None => None,
        }
    }
}

/// The priority of a task.
///
/// # Examples
///
/// ```
/// use kanri_protocol::TaskPriority;
///
/// assert_eq!(TaskPriority::default(), TaskPriority::Medium);
/// assert_eq!(TaskPriority::High.display_name(), "High");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal priority.
    #[default]
    Medium,
    /// Should be done first.
    High,
}

impl TaskPriority {
    /// Returns all priorities from lowest to highest.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::TaskPriority;
    ///
    /// let all = TaskPriority::all();
    /// assert_eq!(all[0], TaskPriority::Low);
    /// assert_eq!(all[2], TaskPriority::High);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    /// Returns a human-readable display name for the priority.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::TaskPriority;
    ///
    /// assert_eq!(TaskPriority::Low.display_name(), "Low");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// A task tracked on the board and the calendar.
///
/// Each task has a unique identifier, a title, workflow status, priority,
/// and optional scheduling and ownership metadata. The `project_id` is a
/// weak reference: deleting the referenced project clears the field rather
/// than deleting the task.
///
/// # Examples
///
/// ```
/// use kanri_protocol::{Task, TaskPriority, TaskStatus};
///
/// let task = Task::new("Write launch notes");
/// assert_eq!(task.status, TaskStatus::Todo);
/// assert_eq!(task.priority, TaskPriority::Medium);
/// assert!(task.due_date.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Short summary of the task. Never empty after trimming.
    pub title: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Current workflow status (the lane this task lives in).
    pub status: TaskStatus,
    /// Priority of the task.
    pub priority: TaskPriority,
    /// When the task is due, if scheduled. Only the calendar date is
    /// significant; time-of-day is ignored by all date bucketing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Weak reference to the project this task belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    /// Free-text label for who the task is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// When this task was created.
    pub created_at: DateTime<Utc>,
    /// When this task was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with the given title.
    ///
    /// The task starts in the `Todo` status with `Medium` priority and no
    /// due date, project, or assignee. Timestamps are set to the current
    /// time.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::Task;
    ///
    /// let task = Task::new("Fix login redirect");
    /// assert_eq!(task.title, "Fix login redirect");
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(TaskId::new_v4(), title)
    }

    /// Creates a new task with a specific ID.
    ///
    /// Useful for testing or when recreating tasks from persistent storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::{Task, TaskId};
    ///
    /// let id = TaskId::new_v4();
    /// let task = Task::with_id(id, "Test task");
    /// assert_eq!(task.id, id);
    /// ```
    #[must_use]
    pub fn with_id(id: TaskId, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            description: None,
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            due_date: None,
            project_id: None,
            assigned_to: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Updates the task's status and refreshes the `updated_at` timestamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::{Task, TaskStatus};
    ///
    /// let mut task = Task::new("Work item");
    /// task.set_status(TaskStatus::InProgress);
    /// assert_eq!(task.status, TaskStatus::InProgress);
    /// ```
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Updates the task's priority and refreshes the `updated_at` timestamp.
    pub fn set_priority(&mut self, priority: TaskPriority) {
        self.priority = priority;
        self.updated_at = Utc::now();
    }

    /// Updates the task's due date and refreshes the `updated_at` timestamp.
    ///
    /// Passing `None` unschedules the task.
    pub fn set_due_date(&mut self, due_date: Option<DateTime<Utc>>) {
        self.due_date = due_date;
        self.updated_at = Utc::now();
    }

    /// Updates the task's project reference and refreshes the `updated_at`
    /// timestamp.
    ///
    /// Passing `None` detaches the task from its project; this is how the
    /// weak reference is cleared when a project is deleted.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::{ProjectId, Task};
    ///
    /// let mut task = Task::new("Work item");
    /// let project = ProjectId::new_v4();
    /// task.set_project(Some(project));
    /// assert_eq!(task.project_id, Some(project));
    ///
    /// task.set_project(None);
    /// assert!(task.project_id.is_none());
    /// ```
    pub fn set_project(&mut self, project_id: Option<ProjectId>) {
        self.project_id = project_id;
        self.updated_at = Utc::now();
    }
}
