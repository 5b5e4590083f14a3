//! Application state management.
//!
//! `AppState` owns the injected [`TaskStore`] and every piece of derived
//! UI state: the lane partition, the calendar grid, selections, and the
//! new-task prompt. All mutations route through the store; after each one
//! the visible board is recomputed from the filtered task set.

use chrono::{Days, NaiveDate};

use kanri_calendar::{MonthGrid, WeekStart, tasks_on_date};
use kanri_protocol::{BoardView, Task, TaskFilter, TaskId, TaskStatus, filter_tasks};
use kanri_store::{StoreError, TaskStore};

/// The screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The Kanban board.
    #[default]
    Board,
    /// The month calendar with the selected-date task list.
    Calendar,
}

impl View {
    /// Returns a human-readable name for the view.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_tui::View;
    ///
    /// assert_eq!(View::Board.display_name(), "Board");
    /// assert_eq!(View::Calendar.display_name(), "Calendar");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Board => "Board",
            Self::Calendar => "Calendar",
        }
    }

    /// Returns the other view.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Board => Self::Calendar,
            Self::Calendar => Self::Board,
        }
    }
}

/// The in-progress new-task prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTaskPrompt {
    /// The title typed so far.
    pub title: String,
}

/// The application state.
///
/// Contains the store plus all mutable UI state: the current view, the
/// derived board, lane/task selection, the calendar grid and selected
/// date, the help overlay flag, the new-task prompt, and a transient
/// status message (used to surface store errors).
#[derive(Debug)]
pub struct AppState {
    store: TaskStore,
    /// The screen currently shown.
    pub view: View,
    /// The filtered task set partitioned into lanes. Recomputed after
    /// every mutation or filter change.
    pub board: BoardView,
    /// Index of the currently focused lane (0-2).
    pub selected_lane: usize,
    /// Index of the selected task within the focused lane, if any.
    pub selected_task: Option<usize>,
    /// The displayed calendar month.
    pub grid: MonthGrid,
    /// The selected calendar date.
    pub selected_date: NaiveDate,
    /// The date the application started on; used for "today" highlights
    /// and analytics.
    pub today: NaiveDate,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// The new-task prompt, if open.
    pub prompt: Option<NewTaskPrompt>,
    /// Transient status line content (typically the last store error).
    pub status_message: Option<String>,
}

impl AppState {
    /// Creates the application state around an opened store.
    ///
    /// The calendar starts on the month containing `today`, with `today`
    /// selected.
    #[must_use]
    pub fn new(store: TaskStore, week_start: WeekStart, today: NaiveDate) -> Self {
        let mut state = Self {
            store,
            view: View::default(),
            board: BoardView::empty(),
            selected_lane: 0,
            selected_task: None,
            grid: MonthGrid::new(today, week_start),
            selected_date: today,
            today,
            help_visible: false,
            prompt: None,
            status_message: None,
        };
        state.rebuild_board();
        state
    }

    /// Returns a read-only handle to the store.
    #[must_use]
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Returns the currently focused lane.
    ///
    /// # Panics
    ///
    /// Panics if `selected_lane` is out of bounds. Navigation methods
    /// maintain the invariant that it is always in `0..3`.
    #[must_use]
    pub fn current_lane(&self) -> &kanri_protocol::Lane {
        self.board
            .lanes
            .get(self.selected_lane)
            .expect("selected_lane should always be in bounds (0..3)")
    }

    /// Returns the selected task, if any.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.selected_task
            .and_then(|idx| self.current_lane().tasks.get(idx))
    }

    /// Returns the tasks due on the selected calendar date, in store
    /// order.
    #[must_use]
    pub fn tasks_due_on_selected_date(&self) -> Vec<&Task> {
        tasks_on_date(self.store.tasks(), self.selected_date).collect()
    }

    /// Recomputes the board from the filtered task set.
    ///
    /// Called after every store mutation and filter change. Selection is
    /// clamped so it always points at an existing task (or nothing).
    pub fn rebuild_board(&mut self) {
        let visible: Vec<Task> = filter_tasks(self.store.tasks(), self.store.filter())
            .cloned()
            .collect();
        self.board = BoardView::partition(visible);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.current_lane().len();
        self.selected_task = match self.selected_task {
            Some(_) if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None => None,
        };
    }

    /// Moves lane focus one to the left, clamping at the first lane.
    pub fn navigate_left(&mut self) {
        self.selected_lane = self.selected_lane.saturating_sub(1);
        self.clamp_selection();
    }

    /// Moves lane focus one to the right, clamping at the last lane.
    pub fn navigate_right(&mut self) {
        self.selected_lane = (self.selected_lane + 1).min(self.board.lanes.len() - 1);
        self.clamp_selection();
    }

    /// Moves task selection up within the lane; at the top the selection
    /// is cleared.
    pub fn navigate_up(&mut self) {
        self.selected_task = match self.selected_task {
            Some(0) | None => None,
            Some(idx) => Some(idx - 1),
        };
    }

    /// Moves task selection down within the lane; with no selection the
    /// first task is selected.
    pub fn navigate_down(&mut self) {
        let len = self.current_lane().len();
        if len == 0 {
            return;
        }
        self.selected_task = match self.selected_task {
            None => Some(0),
            Some(idx) => Some((idx + 1).min(len - 1)),
        };
    }

    /// Clears the task selection.
    pub fn clear_selection(&mut self) {
        self.selected_task = None;
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        if self.help_visible {
            self.help_visible = false;
            true
        } else {
            false
        }
    }

    /// Switches between the board and the calendar view.
    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
    }

    /// Opens the new-task prompt.
    pub fn open_prompt(&mut self) {
        self.prompt = Some(NewTaskPrompt::default());
        self.status_message = None;
    }

    /// Closes the new-task prompt without creating anything.
    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
    }

    /// Appends a character to the prompt title.
    pub fn prompt_input(&mut self, ch: char) {
        if let Some(prompt) = &mut self.prompt {
            prompt.title.push(ch);
        }
    }

    /// Removes the last character from the prompt title.
    pub fn prompt_backspace(&mut self) {
        if let Some(prompt) = &mut self.prompt {
            prompt.title.pop();
        }
    }

    /// Confirms the prompt, creating the task.
    ///
    /// An empty (post-trim) title is rejected here, before the store is
    /// ever called; the prompt stays open with an explanatory message.
    pub fn submit_prompt(&mut self) {
        let Some(prompt) = &self.prompt else {
            return;
        };
        let title = prompt.title.trim();
        if title.is_empty() {
            self.status_message = Some("Task title must not be empty".to_string());
            return;
        }

        let task = Task::new(title);
        let id = task.id;
        match self.store.add_task(task) {
            Ok(()) => {
                self.prompt = None;
                self.status_message = None;
                self.rebuild_board();
                self.focus_task(id);
            }
            Err(err) => self.report_error(&err),
        }
    }

    /// Moves the selected task one lane left or right.
    ///
    /// A move past either end of the board is ignored, as is a move with
    /// nothing selected.
    pub fn move_selected_task(&mut self, forward: bool) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let id = task.id;
        let target = if forward {
            task.status.next()
        } else {
            task.status.previous()
        };
        let Some(target) = target else {
            return;
        };

        match self.store.move_task(id, target) {
            Ok(true) => {
                self.rebuild_board();
                self.focus_task(id);
            }
            // Stale selection or same-status move: nothing happened
            Ok(false) => {}
            Err(err) => {
                self.report_error(&err);
                self.rebuild_board();
            }
        }
    }

    /// Deletes the selected task.
    pub fn delete_selected_task(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let id = task.id;

        match self.store.delete_task(id) {
            Ok(_) => self.rebuild_board(),
            Err(err) => {
                self.report_error(&err);
                self.rebuild_board();
            }
        }
    }

    /// Cycles the status filter: all -> todo -> in progress -> done ->
    /// all. Other filter fields are left untouched.
    pub fn cycle_status_filter(&mut self) {
        let next = match self.store.filter().status {
            None => Some(TaskStatus::Todo),
            Some(TaskStatus::Todo) => Some(TaskStatus::InProgress),
            Some(TaskStatus::InProgress) => Some(TaskStatus::Done),
            Some(TaskStatus::Done) => None,
        };
        let filter = TaskFilter {
            status: next,
            ..self.store.filter().clone()
        };

        if let Err(err) = self.store.set_filter(filter) {
            self.report_error(&err);
        }
        self.rebuild_board();
    }

    /// Moves the selected calendar date by a number of days.
    ///
    /// When the selection leaves the displayed grid, the grid is
    /// recomputed around the new date.
    pub fn move_selected_date(&mut self, days: i64) {
        self.selected_date = if days >= 0 {
            self.selected_date + Days::new(days.unsigned_abs())
        } else {
            self.selected_date - Days::new(days.unsigned_abs())
        };

        if !self.grid.contains(self.selected_date) {
            self.grid = MonthGrid::new(self.selected_date, self.grid.week_start());
        }
    }

    /// Shows the previous month. The selected date is left alone; the
    /// grid moves relative to its current reference month only.
    pub fn prev_month(&mut self) {
        self.grid = self.grid.prev_month();
    }

    /// Shows the next month.
    pub fn next_month(&mut self) {
        self.grid = self.grid.next_month();
    }

    /// Clears the transient status message.
    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    /// Focuses the lane and position of the given task, if visible.
    fn focus_task(&mut self, id: TaskId) {
        for (lane_idx, lane) in self.board.lanes.iter().enumerate() {
            if let Some(task_idx) = lane.tasks.iter().position(|t| t.id == id) {
                self.selected_lane = lane_idx;
                self.selected_task = Some(task_idx);
                return;
            }
        }
        self.clamp_selection();
    }

    fn report_error(&mut self, err: &StoreError) {
        self.status_message = Some(err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use kanri_store::Storage;
    use tempfile::TempDir;

    fn test_state() -> (AppState, TempDir) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("store.json"));
        let store = TaskStore::open(storage).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        (AppState::new(store, WeekStart::Sunday, today), dir)
    }

    fn add_task(state: &mut AppState, title: &str) -> TaskId {
        let task = Task::new(title);
        let id = task.id;
        state.store.add_task(task).unwrap();
        state.rebuild_board();
        id
    }

    #[test]
    fn new_state_defaults() {
        let (state, _dir) = test_state();

        assert_eq!(state.view, View::Board);
        assert_eq!(state.selected_lane, 0);
        assert!(state.selected_task.is_none());
        assert_eq!(state.selected_date, state.today);
        assert_eq!(
            state.grid.month(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert!(!state.help_visible);
        assert!(state.prompt.is_none());
    }

    #[test]
    fn lane_navigation_clamps_at_bounds() {
        let (mut state, _dir) = test_state();

        state.navigate_left();
        assert_eq!(state.selected_lane, 0);

        state.navigate_right();
        state.navigate_right();
        state.navigate_right();
        assert_eq!(state.selected_lane, 2);
    }

    #[test]
    fn task_navigation_selects_and_clears() {
        let (mut state, _dir) = test_state();
        add_task(&mut state, "One");
        add_task(&mut state, "Two");

        assert!(state.selected_task.is_none());
        state.navigate_down();
        assert_eq!(state.selected_task, Some(0));
        state.navigate_down();
        assert_eq!(state.selected_task, Some(1));
        state.navigate_down();
        assert_eq!(state.selected_task, Some(1)); // clamped

        state.navigate_up();
        assert_eq!(state.selected_task, Some(0));
        state.navigate_up();
        assert!(state.selected_task.is_none());
    }

    #[test]
    fn move_selected_task_advances_lane_and_follows() {
        let (mut state, _dir) = test_state();
        let id = add_task(&mut state, "Work item");
        state.navigate_down();

        state.move_selected_task(true);

        assert_eq!(
            state.store().task(id).unwrap().status,
            TaskStatus::InProgress
        );
        // Focus follows the moved card
        assert_eq!(state.selected_lane, 1);
        assert_eq!(state.selected_task, Some(0));
        assert_eq!(state.board.lane(TaskStatus::InProgress).len(), 1);
    }

    #[test]
    fn move_past_board_edge_is_ignored() {
        let (mut state, _dir) = test_state();
        let id = add_task(&mut state, "Work item");
        state.navigate_down();

        // Already in the leftmost lane
        state.move_selected_task(false);

        assert_eq!(state.store().task(id).unwrap().status, TaskStatus::Todo);
        assert_eq!(state.selected_lane, 0);
    }

    #[test]
    fn move_with_no_selection_is_ignored() {
        let (mut state, _dir) = test_state();
        let id = add_task(&mut state, "Work item");

        state.move_selected_task(true);

        assert_eq!(state.store().task(id).unwrap().status, TaskStatus::Todo);
    }

    #[test]
    fn delete_selected_task_removes_and_clamps() {
        let (mut state, _dir) = test_state();
        add_task(&mut state, "One");
        let id = add_task(&mut state, "Two");
        state.navigate_down();
        state.navigate_down(); // select "Two"

        state.delete_selected_task();

        assert!(state.store().task(id).is_none());
        assert_eq!(state.board.lane(TaskStatus::Todo).len(), 1);
        assert_eq!(state.selected_task, Some(0));
    }

    #[test]
    fn prompt_lifecycle_creates_task() {
        let (mut state, _dir) = test_state();

        state.open_prompt();
        for ch in "Ship it".chars() {
            state.prompt_input(ch);
        }
        state.prompt_backspace();
        state.prompt_input('t');
        state.submit_prompt();

        assert!(state.prompt.is_none());
        assert_eq!(state.store().tasks().len(), 1);
        assert_eq!(state.store().tasks()[0].title, "Ship it");
        // The new card is focused
        assert_eq!(state.selected_lane, 0);
        assert_eq!(state.selected_task, Some(0));
    }

    #[test]
    fn prompt_rejects_empty_title_before_store() {
        let (mut state, _dir) = test_state();

        state.open_prompt();
        state.prompt_input(' ');
        state.submit_prompt();

        // Prompt stays open, nothing stored, message explains why
        assert!(state.prompt.is_some());
        assert!(state.store().tasks().is_empty());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn cycle_status_filter_wraps_and_rebuilds() {
        let (mut state, _dir) = test_state();
        let id = add_task(&mut state, "Open");
        state.store.move_task(id, TaskStatus::Done).unwrap();
        add_task(&mut state, "Second open");

        state.cycle_status_filter();
        assert_eq!(state.store().filter().status, Some(TaskStatus::Todo));
        assert_eq!(state.board.total_tasks(), 1);

        state.cycle_status_filter();
        state.cycle_status_filter();
        assert_eq!(state.store().filter().status, Some(TaskStatus::Done));
        assert_eq!(state.board.total_tasks(), 1);
        assert_eq!(state.board.lane(TaskStatus::Done).len(), 1);

        state.cycle_status_filter();
        assert!(state.store().filter().status.is_none());
        assert_eq!(state.board.total_tasks(), 2);
    }

    #[test]
    fn calendar_selection_moves_and_changes_month() {
        let (mut state, _dir) = test_state();
        assert_eq!(
            state.selected_date,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );

        state.move_selected_date(1);
        assert_eq!(
            state.selected_date,
            NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()
        );

        state.move_selected_date(-7);
        assert_eq!(
            state.selected_date,
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
        );

        // Walking far enough forward drags the grid to the next month
        for _ in 0..5 {
            state.move_selected_date(7);
        }
        assert_eq!(state.grid.month(), NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
    }

    #[test]
    fn month_navigation_keeps_selected_date() {
        let (mut state, _dir) = test_state();
        let selected = state.selected_date;

        state.next_month();
        assert_eq!(state.grid.month(), NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        assert_eq!(state.selected_date, selected);

        state.prev_month();
        state.prev_month();
        assert_eq!(state.grid.month(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(state.selected_date, selected);
    }

    #[test]
    fn tasks_due_on_selected_date_uses_date_keys() {
        let (mut state, _dir) = test_state();

        let mut task = Task::new("Late in the evening");
        task.due_date = Some(Utc.with_ymd_and_hms(2024, 3, 15, 23, 0, 0).single().unwrap());
        state.store.add_task(task).unwrap();
        state.rebuild_board();

        let due = state.tasks_due_on_selected_date();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].title, "Late in the evening");
    }

    #[test]
    fn help_toggle_and_dismiss() {
        let (mut state, _dir) = test_state();

        assert!(!state.dismiss_help());
        state.toggle_help();
        assert!(state.help_visible);
        assert!(state.dismiss_help());
        assert!(!state.help_visible);
    }

    #[test]
    fn view_toggles_between_board_and_calendar() {
        let (mut state, _dir) = test_state();

        state.toggle_view();
        assert_eq!(state.view, View::Calendar);
        state.toggle_view();
        assert_eq!(state.view, View::Board);
    }
}
