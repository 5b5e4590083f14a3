//! Shared types and contracts for the kanri application.
//!
//! This crate defines the entity model (tasks, projects), the filter
//! predicate engine, the Kanban board partition, and the TUI message
//! types. It has no storage or rendering concerns; the store and the UI
//! both build on the types defined here.
//!
//! # Overview
//!
//! - [`task`]: task identifiers, statuses, priorities, and the task itself
//! - [`project`]: project identifiers and the project entity
//! - [`filter`]: partial-match filtering over the task collection
//! - [`board`]: the derived lane partition for the Kanban view
//! - [`message`]: messages exchanged between input handling and app state
//!
//! # Examples
//!
//! ```
//! use kanri_protocol::{BoardView, Task, TaskFilter, TaskStatus, filter_tasks};
//!
//! let mut done = Task::new("Ship 1.0");
//! done.status = TaskStatus::Done;
//! let tasks = vec![Task::new("Plan 1.1"), done];
//!
//! // Filter, then partition the visible set into lanes.
//! let filter = TaskFilter::default();
//! let visible: Vec<Task> = filter_tasks(&tasks, &filter).cloned().collect();
//! let board = BoardView::partition(visible);
//!
//! assert_eq!(board.lane(TaskStatus::Todo).len(), 1);
//! assert_eq!(board.lane(TaskStatus::Done).len(), 1);
//! ```

pub mod board;
pub mod filter;
pub mod message;
pub mod project;
pub mod task;

// Re-export primary types at crate root for convenience
pub use board::{BoardView, Lane};
pub use filter::{TaskFilter, filter_tasks};
pub use message::Message;
pub use project::{Project, ProjectId};
pub use task::{Task, TaskId, TaskPriority, TaskStatus};
