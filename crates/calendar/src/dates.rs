//! Due-date bucketing queries.
//!
//! Same-day membership is always decided on a canonical calendar-date key
//! (year-month-day), never on raw timestamps. A task due at 23:00 on a
//! date belongs to that date regardless of the query's time-of-day.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use kanri_protocol::Task;

/// Reduces a moment to its canonical calendar-date key.
///
/// All date bucketing goes through this single normalization so that
/// time-of-day can never leak into a same-day comparison.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use kanri_calendar::date_key;
///
/// let late_evening = Utc.with_ymd_and_hms(2024, 3, 15, 23, 0, 0).unwrap();
/// assert_eq!(
///     date_key(&late_evening),
///     NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
/// );
/// ```
#[must_use]
pub fn date_key(moment: &DateTime<Utc>) -> NaiveDate {
    moment.date_naive()
}

/// Returns the task's due date reduced to its calendar-date key, if the
/// task is scheduled.
#[must_use]
pub fn due_date_key(task: &Task) -> Option<NaiveDate> {
    task.due_date.as_ref().map(date_key)
}

/// Returns the tasks due on the given date, in input order.
///
/// This is a pure derived view over the task collection, not stored
/// state.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use kanri_calendar::tasks_on_date;
/// use kanri_protocol::Task;
///
/// let mut task = Task::new("File taxes");
/// task.due_date = Some(Utc.with_ymd_and_hms(2024, 4, 15, 9, 0, 0).unwrap());
/// let tasks = vec![task];
///
/// let date = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
/// assert_eq!(tasks_on_date(&tasks, date).count(), 1);
/// ```
pub fn tasks_on_date(tasks: &[Task], date: NaiveDate) -> impl Iterator<Item = &Task> {
    tasks
        .iter()
        .filter(move |task| due_date_key(task) == Some(date))
}

/// Returns the set of calendar dates that have at least one task due.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use kanri_calendar::dates_with_tasks;
/// use kanri_protocol::Task;
///
/// let mut task = Task::new("Standup notes");
/// task.due_date = Some(Utc.with_ymd_and_hms(2024, 3, 4, 8, 30, 0).unwrap());
///
/// let dates = dates_with_tasks(&[task]);
/// assert!(dates.contains(&NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()));
/// ```
#[must_use]
pub fn dates_with_tasks(tasks: &[Task]) -> HashSet<NaiveDate> {
    tasks.iter().filter_map(due_date_key).collect()
}

/// Returns `true` if at least one task is due on the given date.
#[must_use]
pub fn has_tasks_on(tasks: &[Task], date: NaiveDate) -> bool {
    tasks.iter().any(|task| due_date_key(task) == Some(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn task_due(title: &str, y: i32, m: u32, d: u32, hour: u32) -> Task {
        let mut task = Task::new(title);
        task.due_date = Some(
            Utc.with_ymd_and_hms(y, m, d, hour, 0, 0)
                .single()
                .expect("valid test timestamp"),
        );
        task
    }

    #[test]
    fn late_evening_due_date_matches_its_calendar_date() {
        let tasks = vec![task_due("Late", 2024, 3, 15, 23)];

        assert!(has_tasks_on(&tasks, date(2024, 3, 15)));
        assert!(!has_tasks_on(&tasks, date(2024, 3, 16)));
    }

    #[test]
    fn tasks_on_date_is_order_preserving() {
        let tasks = vec![
            task_due("First", 2024, 3, 15, 9),
            task_due("Elsewhere", 2024, 3, 20, 9),
            task_due("Second", 2024, 3, 15, 17),
        ];

        let matched: Vec<_> = tasks_on_date(&tasks, date(2024, 3, 15)).collect();
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].title, "First");
        assert_eq!(matched[1].title, "Second");
    }

    #[test]
    fn unscheduled_tasks_never_match() {
        let tasks = vec![Task::new("No due date")];

        assert_eq!(tasks_on_date(&tasks, date(2024, 3, 15)).count(), 0);
        assert!(dates_with_tasks(&tasks).is_empty());
    }

    #[test]
    fn dates_with_tasks_deduplicates() {
        let tasks = vec![
            task_due("Morning", 2024, 3, 15, 9),
            task_due("Evening", 2024, 3, 15, 21),
            task_due("Other", 2024, 3, 16, 12),
        ];

        let dates = dates_with_tasks(&tasks);
        assert_eq!(dates.len(), 2);
        assert!(dates.contains(&date(2024, 3, 15)));
        assert!(dates.contains(&date(2024, 3, 16)));
    }

    #[test]
    fn due_date_key_ignores_time_of_day() {
        let morning = task_due("Morning", 2024, 3, 15, 0);
        let night = task_due("Night", 2024, 3, 15, 23);

        assert_eq!(due_date_key(&morning), due_date_key(&night));
    }
}
