//! New-task prompt widget.
//!
//! A small centered input box for the title of a task being created.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::state::NewTaskPrompt;

use super::help::centered_rect;

/// The width of the prompt box.
const PROMPT_WIDTH: u16 = 46;

/// The height of the prompt box.
const PROMPT_HEIGHT: u16 = 4;

/// Renders the new-task prompt as a centered overlay.
///
/// # Examples
///
/// ```
/// use kanri_tui::NewTaskPrompt;
/// use kanri_tui::widgets::render_prompt;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let prompt = NewTaskPrompt {
///     title: "Write docs".to_string(),
/// };
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_prompt(&prompt, area, &mut buf);
/// ```
pub fn render_prompt(prompt: &NewTaskPrompt, area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(PROMPT_WIDTH, PROMPT_HEIGHT, area);

    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(Span::styled(
            " New Task ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(vec![
            Span::styled("Title: ", Style::default().fg(Color::DarkGray)),
            Span::styled(&prompt.title, Style::default().fg(Color::White)),
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ]),
        Line::from(Span::styled(
            "Enter to create, Esc to cancel",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    Paragraph::new(lines).block(block).render(popup_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_to_string(buf: &Buffer) -> String {
        let mut result = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    result.push_str(cell.symbol());
                }
            }
            result.push('\n');
        }
        result
    }

    #[test]
    fn prompt_shows_typed_title() {
        let prompt = NewTaskPrompt {
            title: "Ship the release".to_string(),
        };
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_prompt(&prompt, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("New Task"));
        assert!(content.contains("Ship the release"));
        assert!(content.contains("Esc to cancel"));
    }

    #[test]
    fn prompt_small_terminal_does_not_panic() {
        let prompt = NewTaskPrompt::default();
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);

        render_prompt(&prompt, area, &mut buf);
    }
}
