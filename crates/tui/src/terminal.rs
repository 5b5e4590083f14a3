//! Terminal setup and teardown utilities.
//!
//! Wraps the raw-mode and alternate-screen handling around the TUI
//! session. A panic hook is provided so a crash never strands the user's
//! terminal in raw mode.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Puts the terminal into TUI mode and returns a Ratatui handle for it.
///
/// Raw mode is enabled and the alternate screen buffer entered, so the
/// user's scrollback is untouched while the app runs.
///
/// # Errors
///
/// Returns an error if any terminal operation fails.
///
/// # Examples
///
/// ```no_run
/// use kanri_tui::terminal;
///
/// let mut terminal = terminal::setup_terminal().expect("failed to setup terminal");
/// // Use terminal...
/// terminal::restore_terminal(&mut terminal).expect("failed to restore terminal");
/// ```
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(TerminalError::Setup)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)
}

/// Hands the terminal back to the shell.
///
/// Undoes everything [`setup_terminal`] did and makes the cursor visible
/// again. Call this on every exit path, including after a failed run.
///
/// # Errors
///
/// Returns an error if any terminal operation fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    leave_tui_mode().map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)?;
    Ok(())
}

/// Installs a panic hook that hands the terminal back before panicking.
///
/// Without this, a panic while in raw mode leaves the shell unusable.
/// Call once at startup, before [`setup_terminal`].
///
/// # Examples
///
/// ```no_run
/// use kanri_tui::terminal;
///
/// fn main() {
///     terminal::install_panic_hook();
///     // Now safe to setup terminal...
/// }
/// ```
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best effort; the panic itself matters more than these results
        let _ = leave_tui_mode();
        original_hook(panic_info);
    }));
}

/// Disables raw mode and leaves the alternate screen. Shared by the
/// orderly and the panicking teardown paths.
fn leave_tui_mode() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}
