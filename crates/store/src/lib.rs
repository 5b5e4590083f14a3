//! Task and project store for the kanri application.
//!
//! This crate owns the authoritative data: the task list, the project
//! list, and the active filter, persisted as a single JSON record. Every
//! other component reads immutable snapshots from the [`TaskStore`] and
//! routes mutations through its operations, giving one serialized writer.
//!
//! # Overview
//!
//! - [`store`]: the [`TaskStore`] with its CRUD, filter-set, and
//!   move-task operations
//! - [`persistence`]: the [`Storage`] handle and the persisted
//!   [`StoreState`] record
//! - [`analytics`]: aggregate statistics over the task collection
//! - [`error`]: error types for validation and persistence failures
//!
//! # Contract highlights
//!
//! - Adding validates: empty titles/names and duplicate ids are rejected.
//! - Updates and deletes referencing unknown ids are observable no-ops:
//!   they return `Ok(false)` and change nothing.
//! - `move_task` is idempotent: moving a task to its current status is a
//!   no-op.
//! - Deleting a project clears the weak `project_id` reference on every
//!   task pointing at it; the tasks survive.
//!
//! # Examples
//!
//! ```no_run
//! use kanri_protocol::{Project, Task, TaskStatus};
//! use kanri_store::{Storage, TaskStore};
//!
//! # fn main() -> kanri_store::Result<()> {
//! let mut store = TaskStore::open(Storage::at_default_location()?)?;
//!
//! let project = Project::new("Launch");
//! let project_id = project.id;
//! store.add_project(project)?;
//!
//! let mut task = Task::new("Write spec");
//! task.project_id = Some(project_id);
//! let task_id = task.id;
//! store.add_task(task)?;
//!
//! store.move_task(task_id, TaskStatus::InProgress)?;
//! store.delete_project(project_id)?; // task survives, reference cleared
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod error;
pub mod persistence;
pub mod store;

// Re-export primary types at crate root for convenience
pub use analytics::{PriorityCounts, StatusCounts, TaskAnalytics, UPCOMING_WINDOW_DAYS};
pub use error::{Result, StoreError};
pub use persistence::{Storage, StoreState, default_store_path};
pub use store::TaskStore;
