//! Main application struct and run loop.
//!
//! `App` orchestrates the TUI lifecycle: polling events, translating them
//! to messages, updating state, and rendering the current view.

use chrono::Utc;
use crossterm::event::Event;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use kanri_calendar::{WeekStart, dates_with_tasks};
use kanri_protocol::Message;
use kanri_store::{TaskAnalytics, TaskStore};

use crate::{
    AppState, View,
    event::{key_to_input_message, key_to_message, poll_event},
    terminal::AppTerminal,
    widgets::{
        render_board, render_calendar, render_help_overlay, render_prompt, render_status_bar,
    },
};

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new application around an opened store.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use kanri_calendar::WeekStart;
    /// use kanri_store::{Storage, TaskStore};
    /// use kanri_tui::App;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let store = TaskStore::open(Storage::at_default_location()?)?;
    /// let app = App::new(store, WeekStart::Sunday);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn new(store: TaskStore, week_start: WeekStart) -> Self {
        let today = Utc::now().date_naive();
        Self {
            state: AppState::new(store, week_start, today),
            should_quit: false,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Updates the application state based on a message.
    ///
    /// When the help overlay is visible, most messages are intercepted to
    /// dismiss the help instead of their normal action. While the
    /// new-task prompt is open, only prompt messages (and `Quit`) are
    /// acted on.
    pub fn update(&mut self, msg: Message) {
        // When help is visible, most keys should dismiss it
        if self.state.help_visible {
            match msg {
                Message::Quit => {
                    self.should_quit = true;
                }
                Message::ToggleHelp | Message::Escape => {
                    self.state.toggle_help();
                }
                // Any other key dismisses help
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        // While the prompt is open, everything is prompt input
        if self.state.prompt.is_some() {
            match msg {
                Message::Quit => {
                    self.should_quit = true;
                }
                Message::InputChar { ch } => self.state.prompt_input(ch),
                Message::InputBackspace => self.state.prompt_backspace(),
                Message::InputConfirm => self.state.submit_prompt(),
                Message::InputCancel | Message::Escape => self.state.cancel_prompt(),
                _ => {}
            }
            return;
        }

        match msg {
            Message::Quit => {
                self.should_quit = true;
            }
            Message::Escape => {
                // Contextual escape: drop the status line first, then the
                // task selection
                if self.state.status_message.is_some() {
                    self.state.clear_status_message();
                } else {
                    self.state.clear_selection();
                }
            }
            Message::ToggleHelp => self.state.toggle_help(),
            Message::ToggleView => self.state.toggle_view(),
            Message::NewTask => self.state.open_prompt(),
            Message::CycleStatusFilter => self.state.cycle_status_filter(),

            Message::NavigateLeft => match self.state.view {
                View::Board => self.state.navigate_left(),
                View::Calendar => self.state.move_selected_date(-1),
            },
            Message::NavigateRight => match self.state.view {
                View::Board => self.state.navigate_right(),
                View::Calendar => self.state.move_selected_date(1),
            },
            Message::NavigateUp => match self.state.view {
                View::Board => self.state.navigate_up(),
                View::Calendar => self.state.move_selected_date(-7),
            },
            Message::NavigateDown => match self.state.view {
                View::Board => self.state.navigate_down(),
                View::Calendar => self.state.move_selected_date(7),
            },

            Message::MoveTaskLeft => {
                if self.state.view == View::Board {
                    self.state.move_selected_task(false);
                }
            }
            Message::MoveTaskRight => {
                if self.state.view == View::Board {
                    self.state.move_selected_task(true);
                }
            }
            Message::DeleteTask => {
                if self.state.view == View::Board {
                    self.state.delete_selected_task();
                }
            }

            Message::PrevMonth => {
                if self.state.view == View::Calendar {
                    self.state.prev_month();
                }
            }
            Message::NextMonth => {
                if self.state.view == View::Calendar {
                    self.state.next_month();
                }
            }

            // Prompt messages outside the prompt are stale input
            Message::InputChar { .. }
            | Message::InputBackspace
            | Message::InputConfirm
            | Message::InputCancel => {}
        }
    }

    /// Renders the application UI to the given frame.
    pub fn view(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Content area
                Constraint::Length(3), // Status bar
            ])
            .split(area);

        self.render_header(frame, chunks[0]);

        match self.state.view {
            View::Board => self.render_board_area(frame, chunks[1]),
            View::Calendar => self.render_calendar_area(frame, chunks[1]),
        }

        self.render_status_area(frame, chunks[2]);

        // Overlays are rendered on top
        if let Some(prompt) = &self.state.prompt {
            render_prompt(prompt, area, frame.buffer_mut());
        }
        if self.state.help_visible {
            render_help_overlay(area, frame.buffer_mut());
        }
    }

    /// Runs the main application loop.
    ///
    /// Blocks until the user quits. Polls for events, updates state, and
    /// renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use kanri_calendar::WeekStart;
    /// use kanri_store::{Storage, TaskStore};
    /// use kanri_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let store = TaskStore::open(Storage::at_default_location()?)?;
    ///     let mut app = App::new(store, WeekStart::Sunday);
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            // Render
            terminal.draw(|frame| self.view(frame))?;

            // Poll for events; the prompt has its own key mapping
            if let Some(Event::Key(key)) = poll_event()? {
                let msg = if self.state.prompt.is_some() {
                    key_to_input_message(key)
                } else {
                    key_to_message(key)
                };
                if let Some(msg) = msg {
                    self.update(msg);
                }
            }

            // Check for quit
            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Renders the header bar with title, view name, and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Split inner area: title left, help cue right
        let [title_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(17), // "Press ? for help" = 16 chars + padding
        ])
        .areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "kanri",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(
                self.state.view.display_name(),
                Style::default().fg(Color::White),
            ),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }

    /// Renders the Kanban board with its three lanes.
    fn render_board_area(&self, frame: &mut Frame, area: Rect) {
        let buf = frame.buffer_mut();
        render_board(
            &self.state.board,
            self.state.selected_lane,
            self.state.selected_task,
            area,
            buf,
        );
    }

    /// Renders the calendar grid and the selected-date task list.
    fn render_calendar_area(&self, frame: &mut Frame, area: Rect) {
        let busy_dates = dates_with_tasks(self.state.store().tasks());
        let due_tasks = self.state.tasks_due_on_selected_date();
        let buf = frame.buffer_mut();
        render_calendar(
            &self.state.grid,
            self.state.selected_date,
            self.state.today,
            &busy_dates,
            &due_tasks,
            area,
            buf,
        );
    }

    /// Renders the status bar with key hints, filter summary, and the
    /// transient message.
    fn render_status_area(&self, frame: &mut Frame, area: Rect) {
        let analytics = TaskAnalytics::compute(self.state.store().tasks(), self.state.today);
        let buf = frame.buffer_mut();
        render_status_bar(
            self.state.view,
            self.state.store().filter(),
            &analytics,
            self.state.status_message.as_deref(),
            area,
            buf,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanri_protocol::{Task, TaskStatus};
    use kanri_store::Storage;
    use tempfile::TempDir;

    fn test_app() -> (App, TempDir) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("store.json"));
        let store = TaskStore::open(storage).unwrap();
        (App::new(store, WeekStart::Sunday), dir)
    }

    fn test_app_with_task(title: &str) -> (App, TempDir) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("store.json"));
        let mut store = TaskStore::open(storage).unwrap();
        store.add_task(Task::new(title)).unwrap();
        (App::new(store, WeekStart::Sunday), dir)
    }

    #[test]
    fn app_quit_message_sets_should_quit() {
        let (mut app, _dir) = test_app();

        assert!(!app.should_quit);
        app.update(Message::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn app_navigation_updates_state() {
        let (mut app, _dir) = test_app();

        app.update(Message::NavigateRight);
        assert_eq!(app.state.selected_lane, 1);

        app.update(Message::NavigateLeft);
        assert_eq!(app.state.selected_lane, 0);
    }

    #[test]
    fn app_toggle_view_switches_navigation_target() {
        let (mut app, _dir) = test_app();
        let start = app.state.selected_date;

        app.update(Message::ToggleView);
        assert_eq!(app.state.view, View::Calendar);

        // Arrows now move the calendar selection, not the lane focus
        app.update(Message::NavigateRight);
        assert_eq!(app.state.selected_lane, 0);
        assert_eq!(app.state.selected_date, start + chrono::Days::new(1));
    }

    #[test]
    fn app_toggle_help_shows_and_hides() {
        let (mut app, _dir) = test_app();

        assert!(!app.state.help_visible);

        app.update(Message::ToggleHelp);
        assert!(app.state.help_visible);

        app.update(Message::ToggleHelp);
        assert!(!app.state.help_visible);
    }

    #[test]
    fn app_help_dismisses_on_any_key() {
        let (mut app, _dir) = test_app();

        app.update(Message::ToggleHelp);
        assert!(app.state.help_visible);

        app.update(Message::NavigateLeft);
        assert!(!app.state.help_visible);
    }

    #[test]
    fn app_help_blocks_navigation() {
        let (mut app, _dir) = test_app();

        assert_eq!(app.state.selected_lane, 0);

        app.update(Message::ToggleHelp);
        app.update(Message::NavigateRight);

        // Navigation is swallowed by dismissing help
        assert!(!app.state.help_visible);
        assert_eq!(app.state.selected_lane, 0);
    }

    #[test]
    fn app_quit_works_with_help_visible() {
        let (mut app, _dir) = test_app();

        app.update(Message::ToggleHelp);
        app.update(Message::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn app_prompt_flow_creates_task() {
        let (mut app, _dir) = test_app();

        app.update(Message::NewTask);
        assert!(app.state.prompt.is_some());

        for ch in "New card".chars() {
            app.update(Message::InputChar { ch });
        }
        app.update(Message::InputConfirm);

        assert!(app.state.prompt.is_none());
        assert_eq!(app.state.store().tasks().len(), 1);
        assert_eq!(app.state.store().tasks()[0].title, "New card");
    }

    #[test]
    fn app_prompt_swallows_regular_messages() {
        let (mut app, _dir) = test_app();

        app.update(Message::NewTask);
        app.update(Message::NavigateRight);

        // Lane focus untouched while prompting
        assert_eq!(app.state.selected_lane, 0);
        assert!(app.state.prompt.is_some());

        app.update(Message::Escape);
        assert!(app.state.prompt.is_none());
    }

    #[test]
    fn app_move_task_right_from_board() {
        let (mut app, _dir) = test_app_with_task("Work item");

        app.update(Message::NavigateDown); // select the task
        app.update(Message::MoveTaskRight);

        let task = &app.state.store().tasks()[0];
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[test]
    fn app_month_keys_only_act_on_calendar() {
        let (mut app, _dir) = test_app();
        let month = app.state.grid.month();

        app.update(Message::NextMonth);
        assert_eq!(app.state.grid.month(), month);

        app.update(Message::ToggleView);
        app.update(Message::NextMonth);
        assert_ne!(app.state.grid.month(), month);
    }

    #[test]
    fn app_escape_clears_message_then_selection() {
        let (mut app, _dir) = test_app_with_task("Work item");

        app.update(Message::NavigateDown);
        assert!(app.state.selected_task.is_some());

        // Provoke a status message via an empty prompt submit
        app.update(Message::NewTask);
        app.update(Message::InputConfirm);
        app.update(Message::InputCancel);
        assert!(app.state.status_message.is_some());

        app.update(Message::Escape);
        assert!(app.state.status_message.is_none());
        assert!(app.state.selected_task.is_some());

        app.update(Message::Escape);
        assert!(app.state.selected_task.is_none());
        assert!(!app.should_quit);
    }
}
