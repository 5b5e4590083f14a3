//! Month grid computation.
//!
//! The calendar view shows a month as complete weeks: the grid starts on
//! the week containing the first of the month and ends on the week
//! containing the last day, so leading and trailing days from adjacent
//! months are included (flagged as outside the month). The grid length is
//! always a multiple of seven.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of days in a calendar week.
pub const DAYS_PER_WEEK: usize = 7;

/// The day a week starts on.
///
/// The grid (and the weekday header row) pivot on this.
///
/// # Examples
///
/// ```
/// use kanri_calendar::WeekStart;
///
/// assert_eq!(WeekStart::default(), WeekStart::Sunday);
/// assert_eq!(WeekStart::Monday.weekday_labels()[0], "Mo");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    /// Weeks run Sunday through Saturday.
    #[default]
    Sunday,
    /// Weeks run Monday through Sunday.
    Monday,
}

impl WeekStart {
    /// Returns how many days `date` is past the start of its week.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use kanri_calendar::WeekStart;
    ///
    /// // 2024-03-15 is a Friday
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// assert_eq!(WeekStart::Sunday.days_into_week(date), 5);
    /// assert_eq!(WeekStart::Monday.days_into_week(date), 4);
    /// ```
    #[must_use]
    pub fn days_into_week(self, date: NaiveDate) -> u32 {
        match self {
            Self::Sunday => date.weekday().num_days_from_sunday(),
            Self::Monday => date.weekday().num_days_from_monday(),
        }
    }

    /// Returns the two-letter weekday labels for a header row, starting
    /// with this week start.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_calendar::WeekStart;
    ///
    /// assert_eq!(WeekStart::Sunday.weekday_labels()[0], "Su");
    /// assert_eq!(WeekStart::Monday.weekday_labels()[6], "Su");
    /// ```
    #[must_use]
    pub const fn weekday_labels(self) -> [&'static str; DAYS_PER_WEEK] {
        match self {
            Self::Sunday => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
            Self::Monday => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
        }
    }
}

/// Returns the first day of the month containing `date`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use kanri_calendar::month_start;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// assert_eq!(month_start(date), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
/// ```
#[must_use]
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// Returns the last day of the month containing `date`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use kanri_calendar::month_end;
///
/// // 2024 is a leap year
/// let date = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
/// assert_eq!(month_end(date), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
#[must_use]
pub fn month_end(date: NaiveDate) -> NaiveDate {
    add_months(month_start(date), 1) - Days::new(1)
}

/// Shifts `date` by a number of months, clamping the day to the target
/// month's length (e.g. Jan 31 plus one month is Feb 29 in a leap year).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use kanri_calendar::add_months;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// assert_eq!(add_months(date, 1), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(add_months(date, -1), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
/// ```
#[must_use]
pub fn add_months(date: NaiveDate, delta: i32) -> NaiveDate {
    if delta >= 0 {
        date.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(delta.unsigned_abs()))
    }
    .expect("shifted date stays within the supported calendar range")
}

/// Returns the first day of the week containing `date`.
#[must_use]
pub fn start_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    date - Days::new(u64::from(week_start.days_into_week(date)))
}

/// Returns the last day of the week containing `date`.
#[must_use]
pub fn end_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    start_of_week(date, week_start) + Days::new(DAYS_PER_WEEK as u64 - 1)
}

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The calendar date of this cell.
    pub date: NaiveDate,
    /// Whether the date belongs to the displayed month (leading and
    /// trailing days from adjacent months are present but flagged).
    pub in_month: bool,
}

/// The day grid for one displayed month.
///
/// The reference month is caller-controlled state: navigating recomputes
/// the grid relative to the current reference month, never relative to
/// "today".
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use kanri_calendar::{MonthGrid, WeekStart};
///
/// let any_march_day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let grid = MonthGrid::new(any_march_day, WeekStart::Sunday);
///
/// assert_eq!(grid.days().len() % 7, 0);
/// assert!(grid.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
/// assert!(grid.contains(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: NaiveDate,
    week_start: WeekStart,
    days: Vec<CalendarDay>,
}

impl MonthGrid {
    /// Computes the grid for the month containing `reference`.
    ///
    /// Any day of the month may be passed; the reference is normalized to
    /// the first of the month.
    #[must_use]
    pub fn new(reference: NaiveDate, week_start: WeekStart) -> Self {
        let first = month_start(reference);
        let last = month_end(first);
        let grid_start = start_of_week(first, week_start);
        let grid_end = end_of_week(last, week_start);

        let days = grid_start
            .iter_days()
            .take_while(|day| *day <= grid_end)
            .map(|date| CalendarDay {
                date,
                in_month: date.year() == first.year() && date.month() == first.month(),
            })
            .collect();

        Self {
            month: first,
            week_start,
            days,
        }
    }

    /// Returns the first day of the displayed month.
    #[must_use]
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    /// Returns the week start this grid was computed with.
    #[must_use]
    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Returns every cell of the grid, leading and trailing days included.
    #[must_use]
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// Returns the grid partitioned into rows of seven days.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use kanri_calendar::{MonthGrid, WeekStart};
    ///
    /// let grid = MonthGrid::new(
    ///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    ///     WeekStart::Sunday,
    /// );
    /// for week in grid.weeks() {
    ///     assert_eq!(week.len(), 7);
    /// }
    /// ```
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(DAYS_PER_WEEK)
    }

    /// Returns `true` if `date` is one of the displayed cells.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.days.first(), self.days.last()) {
            (Some(first), Some(last)) => first.date <= date && date <= last.date,
            _ => false,
        }
    }

    /// Computes the grid for the previous month, keeping the week start.
    #[must_use]
    pub fn prev_month(&self) -> Self {
        Self::new(add_months(self.month, -1), self.week_start)
    }

    /// Computes the grid for the next month, keeping the week start.
    #[must_use]
    pub fn next_month(&self) -> Self {
        Self::new(add_months(self.month, 1), self.week_start)
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_week_start() -> impl Strategy<Value = WeekStart> {
        prop_oneof![Just(WeekStart::Sunday), Just(WeekStart::Monday)]
    }

    proptest! {
        /// For any month and week start: the grid is complete weeks, covers
        /// the whole month, and starts/ends on week boundaries.
        #[test]
        fn grid_invariants(
            year in 1990i32..2100,
            month in 1u32..=12,
            week_start in arb_week_start(),
        ) {
            let reference = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month");
            let grid = MonthGrid::new(reference, week_start);

            prop_assert_eq!(grid.days().len() % DAYS_PER_WEEK, 0);

            let last_day = month_end(reference);
            let in_month = grid.days().iter().filter(|c| c.in_month).count();
            prop_assert_eq!(in_month as u32, last_day.day());

            let first = grid.days().first().expect("non-empty grid");
            let last = grid.days().last().expect("non-empty grid");
            prop_assert_eq!(week_start.days_into_week(first.date), 0);
            prop_assert_eq!(week_start.days_into_week(last.date), 6);

            // Days are contiguous
            for pair in grid.days().windows(2) {
                prop_assert_eq!(pair[0].date + Days::new(1), pair[1].date);
            }
        }
    }
}
