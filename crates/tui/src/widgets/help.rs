//! Help overlay widget.
//!
//! Displays all available keybindings when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 38;

/// The height of the help overlay panel (content lines plus borders).
const HELP_HEIGHT: u16 = 23;

/// Renders a centered help overlay displaying all keybindings.
///
/// The overlay is rendered on top of the existing content; the area
/// behind it is cleared first.
///
/// # Examples
///
/// ```
/// use kanri_tui::widgets::render_help_overlay;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);

    // Clear the area behind the popup for a clean look
    Clear.render(popup_area, buf);

    let lines = build_help_lines();

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    let help_text = Paragraph::new(lines)
        .block(help_block)
        .alignment(Alignment::Left);

    help_text.render(popup_area, buf);
}

/// Computes a centered rectangle of the given size within `area`,
/// clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Builds the lines of help content.
fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let entry = |key: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<11}"), key_style),
            Span::styled(action, text_style),
        ])
    };

    vec![
        Line::from(""),
        Line::from(Span::styled("  Navigation", header_style)),
        entry("←/→", "Focus lane / select day"),
        entry("↑/↓", "Select task / move a week"),
        entry("Esc", "Clear message or selection"),
        Line::from(""),
        Line::from(Span::styled("  Board", header_style)),
        entry("[ and ]", "Move task between lanes"),
        entry("n", "New task"),
        entry("d", "Delete task"),
        entry("f", "Cycle status filter"),
        Line::from(""),
        Line::from(Span::styled("  Calendar", header_style)),
        entry("PgUp/PgDn", "Previous / next month"),
        Line::from(""),
        Line::from(Span::styled("  General", header_style)),
        entry("Tab", "Toggle board / calendar"),
        entry("?", "Toggle help"),
        entry("Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", hint_style)),
    ]
}
