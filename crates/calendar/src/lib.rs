//! Calendar bucketing for the kanri application.
//!
//! This crate maps tasks to calendar dates and computes the day grid for
//! a displayed month. It is independent of the store's shape: every
//! function takes plain task slices and dates.
//!
//! # Overview
//!
//! - [`grid`]: week-start handling, month arithmetic, and the month grid
//!   of complete weeks
//! - [`dates`]: calendar-date normalization and due-date membership
//!   queries
//!
//! # Examples
//!
//! ```
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use kanri_calendar::{MonthGrid, WeekStart, tasks_on_date};
//! use kanri_protocol::Task;
//!
//! let mut task = Task::new("Pay rent");
//! task.due_date = Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
//! let tasks = vec![task];
//!
//! let grid = MonthGrid::new(
//!     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
//!     WeekStart::Sunday,
//! );
//! assert_eq!(grid.days().len() % 7, 0);
//! assert_eq!(tasks_on_date(&tasks, grid.month()).count(), 1);
//! ```

pub mod dates;
pub mod grid;

// Re-export primary types at crate root for convenience
pub use dates::{date_key, dates_with_tasks, due_date_key, has_tasks_on, tasks_on_date};
pub use grid::{
    CalendarDay, DAYS_PER_WEEK, MonthGrid, WeekStart, add_months, end_of_week, month_end,
    month_start, start_of_week,
};
