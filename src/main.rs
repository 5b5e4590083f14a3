//! kanri - a Kanban task manager with a calendar view for the terminal.
//!
//! This is the main binary that loads the configuration, opens the store,
//! and launches the TUI application.

use kanri_config::Config;
use kanri_store::{Storage, TaskStore, default_store_path};
use kanri_tui::{App, terminal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    // Configuration is optional; defaults apply when no file exists
    let config = Config::load()?;
    let data_file = match &config.data_file {
        Some(path) => path.clone(),
        None => default_store_path()?,
    };

    // Load the persisted state (or start empty)
    let store = TaskStore::open(Storage::new(data_file))?;

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::new(store, config.week_start);

    // Run the main loop
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
