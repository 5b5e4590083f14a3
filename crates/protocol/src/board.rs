//! Kanban board partition types.
//!
//! This module defines the derived board view: the visible task set
//! partitioned into one lane per [`TaskStatus`]. Lanes are computed from
//! the task collection, never stored; a task's lane is wherever its
//! `status` says it is.

use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskId, TaskStatus};

/// A single lane (column) on the Kanban board.
///
/// Contains the tasks that share one workflow status, in the order they
/// appeared in the source collection.
///
/// # Examples
///
/// ```
/// use kanri_protocol::{Lane, TaskStatus};
///
/// let lane = Lane::new(TaskStatus::Todo);
/// assert!(lane.is_empty());
/// assert_eq!(lane.status, TaskStatus::Todo);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    /// The status shared by every task in this lane.
    pub status: TaskStatus,
    /// Tasks currently in this lane, in source order.
    pub tasks: Vec<Task>,
}

impl Lane {
    /// Creates a new empty lane for the given status.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::{Lane, TaskStatus};
    ///
    /// let lane = Lane::new(TaskStatus::InProgress);
    /// assert!(lane.tasks.is_empty());
    /// ```
    #[must_use]
    pub const fn new(status: TaskStatus) -> Self {
        Self {
            status,
            tasks: Vec::new(),
        }
    }

    /// Returns the number of tasks in this lane.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the lane has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns a reference to a task by ID, if it is in this lane.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }
}

/// The Kanban board: the visible task set partitioned into three lanes.
///
/// A `BoardView` is a pure derived view. Partitioning is a disjoint cover:
/// every input task lands in exactly one lane (the one matching its
/// status), and each lane preserves the relative order of the input.
///
/// # Examples
///
/// ```
/// use kanri_protocol::{BoardView, Task, TaskStatus};
///
/// let mut done = Task::new("Shipped");
/// done.status = TaskStatus::Done;
/// let board = BoardView::partition(vec![Task::new("Open"), done]);
///
/// assert_eq!(board.lane(TaskStatus::Todo).len(), 1);
/// assert_eq!(board.lane(TaskStatus::Done).len(), 1);
/// assert_eq!(board.total_tasks(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// The three lanes, indexed by [`TaskStatus::index`].
    pub lanes: [Lane; 3],
}

impl Default for BoardView {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoardView {
    /// Creates an empty board with its three lanes.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::BoardView;
    ///
    /// let board = BoardView::empty();
    /// assert_eq!(board.total_tasks(), 0);
    /// ```
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lanes: [
                Lane::new(TaskStatus::Todo),
                Lane::new(TaskStatus::InProgress),
                Lane::new(TaskStatus::Done),
            ],
        }
    }

    /// Partitions tasks into lanes by status.
    ///
    /// Each task is placed in exactly one lane; within each lane the input
    /// order is preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::{BoardView, Task, TaskStatus};
    ///
    /// let board = BoardView::partition(vec![Task::new("A"), Task::new("B")]);
    /// let todo = board.lane(TaskStatus::Todo);
    /// assert_eq!(todo.tasks[0].title, "A");
    /// assert_eq!(todo.tasks[1].title, "B");
    /// ```
    #[must_use]
    pub fn partition<I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = Task>,
    {
        let mut board = Self::empty();
        for task in tasks {
            board.lanes[task.status.index()].tasks.push(task);
        }
        board
    }

    /// Returns a reference to the lane for the given status.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::{BoardView, TaskStatus};
    ///
    /// let board = BoardView::empty();
    /// assert_eq!(board.lane(TaskStatus::Done).status, TaskStatus::Done);
    /// ```
    #[must_use]
    pub fn lane(&self, status: TaskStatus) -> &Lane {
        &self.lanes[status.index()]
    }

    /// Finds a task by ID across all lanes.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.lanes.iter().find_map(|lane| lane.task(id))
    }

    /// Returns the total number of tasks across all lanes.
    #[must_use]
    pub fn total_tasks(&self) -> usize {
        self.lanes.iter().map(Lane::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks_with_statuses(statuses: &[TaskStatus]) -> Vec<Task> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| {
                let mut task = Task::new(format!("Task {i}"));
                task.status = *status;
                task
            })
            .collect()
    }

    #[test]
    fn empty_board_has_three_lanes() {
        let board = BoardView::empty();
        assert_eq!(board.lanes.len(), 3);

        for (i, lane) in board.lanes.iter().enumerate() {
            assert_eq!(lane.status.index(), i);
            assert!(lane.is_empty());
        }
    }

    #[test]
    fn partition_is_disjoint_cover() {
        let tasks = tasks_with_statuses(&[
            TaskStatus::Done,
            TaskStatus::Todo,
            TaskStatus::InProgress,
            TaskStatus::Todo,
        ]);
        let ids: Vec<_> = tasks.iter().map(|t| t.id).collect();
        let board = BoardView::partition(tasks);

        assert_eq!(board.total_tasks(), 4);
        assert_eq!(board.lane(TaskStatus::Todo).len(), 2);
        assert_eq!(board.lane(TaskStatus::InProgress).len(), 1);
        assert_eq!(board.lane(TaskStatus::Done).len(), 1);

        // Every input task appears in exactly one lane
        for id in ids {
            let appearances = board
                .lanes
                .iter()
                .filter(|lane| lane.task(id).is_some())
                .count();
            assert_eq!(appearances, 1);
        }
    }

    #[test]
    fn partition_preserves_relative_order() {
        let tasks = tasks_with_statuses(&[
            TaskStatus::Todo,
            TaskStatus::Done,
            TaskStatus::Todo,
            TaskStatus::Todo,
        ]);
        let board = BoardView::partition(tasks);

        let todo = board.lane(TaskStatus::Todo);
        assert_eq!(todo.tasks[0].title, "Task 0");
        assert_eq!(todo.tasks[1].title, "Task 2");
        assert_eq!(todo.tasks[2].title, "Task 3");
    }

    #[test]
    fn lane_lookup_by_id() {
        let tasks = tasks_with_statuses(&[TaskStatus::InProgress]);
        let id = tasks[0].id;
        let board = BoardView::partition(tasks);

        assert!(board.lane(TaskStatus::InProgress).task(id).is_some());
        assert!(board.lane(TaskStatus::Todo).task(id).is_none());
        assert!(board.task(id).is_some());
        assert!(board.task(TaskId::new_v4()).is_none());
    }

    #[test]
    fn board_serialization_roundtrip() {
        let board = BoardView::partition(tasks_with_statuses(&[
            TaskStatus::Todo,
            TaskStatus::Done,
        ]));

        let json = serde_json::to_string(&board).expect("serialize");
        let parsed: BoardView = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(board, parsed);
    }
}
