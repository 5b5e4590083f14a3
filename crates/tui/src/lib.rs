//! Terminal UI for the kanri application.
//!
//! This crate provides a Ratatui-based interface with two views: the
//! Kanban board and the month calendar. The store is injected into the
//! app; every mutation routes through it and the visible board is
//! recomputed from the filtered task set afterwards.
//!
//! # Overview
//!
//! - [`app`]: main application struct and run loop
//! - [`state`]: application state management
//! - [`event`]: event polling and key mappings
//! - [`terminal`]: terminal setup, teardown, and panic handling
//! - [`widgets`]: rendering functions for the board, calendar, status
//!   bar, and overlays
//!
//! # Example
//!
//! ```no_run
//! use kanri_calendar::WeekStart;
//! use kanri_store::{Storage, TaskStore};
//! use kanri_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let store = TaskStore::open(Storage::at_default_location()?)?;
//!     let mut app = App::new(store, WeekStart::Sunday);
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod state;
pub mod terminal;
pub mod widgets;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::{AppState, NewTaskPrompt, View};
