//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use kanri_protocol::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(matches!(msg, Message::NavigateRight));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection to the left (previous lane, or previous day).
    NavigateLeft,
    /// Move selection to the right (next lane, or next day).
    NavigateRight,
    /// Move selection up within the current lane, or back one week.
    NavigateUp,
    /// Move selection down within the current lane, or forward one week.
    NavigateDown,
    /// Escape: close the prompt, clear the status line, or clear selection.
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Switch between the board view and the calendar view.
    ToggleView,
    /// Move the selected task one lane to the left.
    MoveTaskLeft,
    /// Move the selected task one lane to the right.
    MoveTaskRight,
    /// Open the new-task prompt.
    NewTask,
    /// Delete the selected task.
    DeleteTask,
    /// Cycle the status filter (all -> todo -> in progress -> done -> all).
    CycleStatusFilter,
    /// Show the previous month on the calendar.
    PrevMonth,
    /// Show the next month on the calendar.
    NextMonth,

    // --- New-task prompt messages ---
    /// Input a character while the prompt is open.
    InputChar {
        /// The character that was input.
        ch: char,
    },
    /// Delete the last character in the prompt.
    InputBackspace,
    /// Confirm the prompt, creating the task.
    InputConfirm,
    /// Cancel the prompt without creating anything.
    InputCancel,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(Message::NavigateUp.is_navigation());
    /// assert!(!Message::Quit.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message belongs to the new-task prompt.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_protocol::Message;
    ///
    /// assert!(Message::InputConfirm.is_input());
    /// assert!(Message::InputChar { ch: 'a' }.is_input());
    /// assert!(!Message::NewTask.is_input());
    /// ```
    #[must_use]
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Self::InputChar { .. } | Self::InputBackspace | Self::InputConfirm | Self::InputCancel
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_navigation_detection() {
        assert!(Message::NavigateLeft.is_navigation());
        assert!(Message::NavigateRight.is_navigation());
        assert!(Message::NavigateUp.is_navigation());
        assert!(Message::NavigateDown.is_navigation());
        assert!(!Message::ToggleView.is_navigation());
        assert!(!Message::Quit.is_navigation());
        assert!(!Message::MoveTaskLeft.is_navigation());
    }

    #[test]
    fn message_terminating_detection() {
        assert!(Message::Quit.is_terminating());
        assert!(!Message::Escape.is_terminating());
        assert!(!Message::DeleteTask.is_terminating());
    }

    #[test]
    fn message_input_detection() {
        assert!(Message::InputChar { ch: 'a' }.is_input());
        assert!(Message::InputBackspace.is_input());
        assert!(Message::InputConfirm.is_input());
        assert!(Message::InputCancel.is_input());
        assert!(!Message::NewTask.is_input());
        assert!(!Message::NavigateLeft.is_input());
    }

    #[test]
    fn message_serialization_roundtrip() {
        let messages = vec![
            Message::NavigateLeft,
            Message::NavigateRight,
            Message::NavigateUp,
            Message::NavigateDown,
            Message::Escape,
            Message::Quit,
            Message::ToggleHelp,
            Message::ToggleView,
            Message::MoveTaskLeft,
            Message::MoveTaskRight,
            Message::NewTask,
            Message::DeleteTask,
            Message::CycleStatusFilter,
            Message::PrevMonth,
            Message::NextMonth,
            Message::InputChar { ch: 'x' },
            Message::InputBackspace,
            Message::InputConfirm,
            Message::InputCancel,
        ];

        for msg in messages {
            let json = serde_json::to_string(&msg).expect("serialize");
            let parsed: Message = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(msg, parsed);
        }
    }

    #[test]
    fn message_json_format() {
        let json = serde_json::to_string(&Message::NavigateLeft).expect("serialize");
        assert_eq!(json, r#""navigate_left""#);

        let json = serde_json::to_string(&Message::CycleStatusFilter).expect("serialize");
        assert_eq!(json, r#""cycle_status_filter""#);

        let json = serde_json::to_string(&Message::ToggleView).expect("serialize");
        assert_eq!(json, r#""toggle_view""#);
    }
}
