//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal key
//! events to application messages. Two mappings exist: the regular one,
//! and a prompt mapping used while the new-task prompt is open (where
//! most keys become text input).

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use kanri_protocol::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal key event to an application message.
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (dismiss message or clear selection) |
/// | `Left`/`Right`/`Up`/`Down` | Navigate |
/// | `[` / `]` | Move selected task one lane left / right |
/// | `n` | New task |
/// | `d` | Delete selected task |
/// | `f` | Cycle the status filter |
/// | `Tab` | Toggle board / calendar view |
/// | `PageUp` / `PageDown` | Previous / next month (calendar) |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    // Check for Ctrl+C first
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        // Escape (contextual: dismiss message or clear selection)
        KeyCode::Esc => Some(Message::Escape),

        // Navigation (arrow keys only)
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        // Workflow moves (the drag-and-drop analog)
        KeyCode::Char('[') => Some(Message::MoveTaskLeft),
        KeyCode::Char(']') => Some(Message::MoveTaskRight),

        // Task actions
        KeyCode::Char('n') => Some(Message::NewTask),
        KeyCode::Char('d') => Some(Message::DeleteTask),
        KeyCode::Char('f') => Some(Message::CycleStatusFilter),

        // Views
        KeyCode::Tab => Some(Message::ToggleView),
        KeyCode::PageUp => Some(Message::PrevMonth),
        KeyCode::PageDown => Some(Message::NextMonth),

        // Other actions
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event to a message while the new-task prompt is open.
///
/// In prompt mode most keys are text input; only `Esc`, `Enter`,
/// `Backspace`, and `Ctrl+C` keep a special meaning.
///
/// # Key Bindings (Prompt Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Cancel the prompt |
/// | `Enter` | Confirm, creating the task |
/// | `Backspace` | Delete last character |
/// | any character | Append to the title |
#[must_use]
pub fn key_to_input_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::InputCancel),
        KeyCode::Enter => Some(Message::InputConfirm),
        KeyCode::Backspace => Some(Message::InputBackspace),
        KeyCode::Char(ch) => Some(Message::InputChar { ch }),
        _ => None,
    }
}
