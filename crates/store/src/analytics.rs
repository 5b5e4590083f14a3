//! Aggregate task statistics.
//!
//! Powers the dashboard summary: counts by status and priority, the
//! completion rate, and how many open tasks are overdue or coming due.
//! Due-date comparisons use calendar-date keys, so a task due late
//! tonight is "due soon", not overdue.

use chrono::{Days, NaiveDate};

use kanri_calendar::due_date_key;
use kanri_protocol::{Task, TaskPriority, TaskStatus};

/// How many days ahead counts as "due soon".
pub const UPCOMING_WINDOW_DAYS: u64 = 7;

/// Task counts per workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    /// Tasks not yet started.
    pub todo: usize,
    /// Tasks in progress.
    pub in_progress: usize,
    /// Finished tasks.
    pub done: usize,
}

/// Task counts per priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriorityCounts {
    /// Low-priority tasks.
    pub low: usize,
    /// Medium-priority tasks.
    pub medium: usize,
    /// High-priority tasks.
    pub high: usize,
}

/// Aggregate statistics over a task collection.
///
/// A pure derived view: compute it from the current task list whenever it
/// is needed, against an explicit "today" so the result is reproducible.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use kanri_protocol::Task;
/// use kanri_store::TaskAnalytics;
///
/// let tasks = vec![Task::new("Only task")];
/// let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
///
/// let analytics = TaskAnalytics::compute(&tasks, today);
/// assert_eq!(analytics.total, 1);
/// assert_eq!(analytics.completion_rate, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskAnalytics {
    /// Total number of tasks.
    pub total: usize,
    /// Number of tasks with status done.
    pub completed: usize,
    /// Percentage of tasks completed, rounded to the nearest integer.
    pub completion_rate: u8,
    /// Open tasks whose due date has passed.
    pub overdue: usize,
    /// Open tasks due within [`UPCOMING_WINDOW_DAYS`] days (today
    /// included).
    pub due_soon: usize,
    /// Counts per status.
    pub status: StatusCounts,
    /// Counts per priority.
    pub priority: PriorityCounts,
}

impl TaskAnalytics {
    /// Computes statistics for the given tasks as of `today`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, TimeZone, Utc};
    /// use kanri_protocol::{Task, TaskStatus};
    /// use kanri_store::TaskAnalytics;
    ///
    /// let mut late = Task::new("Late");
    /// late.due_date = Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// let analytics = TaskAnalytics::compute(&[late], today);
    /// assert_eq!(analytics.overdue, 1);
    /// ```
    #[must_use]
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        let mut analytics = Self {
            total: tasks.len(),
            ..Default::default()
        };
        let upcoming_threshold = today + Days::new(UPCOMING_WINDOW_DAYS);

        for task in tasks {
            match task.status {
                TaskStatus::Todo => analytics.status.todo += 1,
                TaskStatus::InProgress => analytics.status.in_progress += 1,
                TaskStatus::Done => analytics.status.done += 1,
            }
            match task.priority {
                TaskPriority::Low => analytics.priority.low += 1,
                TaskPriority::Medium => analytics.priority.medium += 1,
                TaskPriority::High => analytics.priority.high += 1,
            }

            // Done tasks are neither overdue nor due soon
            if task.status == TaskStatus::Done {
                continue;
            }
            if let Some(due) = due_date_key(task) {
                if due < today {
                    analytics.overdue += 1;
                } else if due <= upcoming_threshold {
                    analytics.due_soon += 1;
                }
            }
        }

        analytics.completed = analytics.status.done;
        if analytics.total > 0 {
            let rate = analytics.completed as f64 / analytics.total as f64 * 100.0;
            analytics.completion_rate = rate.round() as u8;
        }

        analytics
    }
}
