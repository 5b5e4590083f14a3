//! Status bar rendering widget.
//!
//! The footer shows keybinding hints for the current view, the active
//! filter, and a completion summary. When a transient status message is
//! set (e.g. a persistence error), it takes over the whole bar.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use kanri_protocol::TaskFilter;
use kanri_store::TaskAnalytics;

use crate::state::View;

/// Renders the status bar.
///
/// # Arguments
///
/// * `view` - The current view, which decides the key hints
/// * `filter` - The active filter, summarized on the right
/// * `analytics` - Aggregate stats; the completion summary comes from here
/// * `message` - Transient message that replaces the hints when set
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
///
/// # Examples
///
/// ```
/// use kanri_protocol::TaskFilter;
/// use kanri_store::TaskAnalytics;
/// use kanri_tui::View;
/// use kanri_tui::widgets::render_status_bar;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let area = Rect::new(0, 0, 80, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(
///     View::Board,
///     &TaskFilter::default(),
///     &TaskAnalytics::default(),
///     None,
///     area,
///     &mut buf,
/// );
/// ```
pub fn render_status_bar(
    view: View,
    filter: &TaskFilter,
    analytics: &TaskAnalytics,
    message: Option<&str>,
    area: Rect,
    buf: &mut Buffer,
) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    block.render(area, buf);

    // A status message takes over the whole bar
    if let Some(message) = message {
        let line = Line::from(vec![
            Span::styled("! ", Style::default().fg(Color::Red)),
            Span::styled(message, Style::default().fg(Color::Red)),
            Span::styled("  (Esc to dismiss)", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(line).render(inner, buf);
        return;
    }

    let summary = summary_text(filter, analytics);
    let [hints_area, summary_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(summary.len() as u16 + 1),
    ])
    .areas(inner);

    Paragraph::new(hint_line(view)).render(hints_area, buf);
    Paragraph::new(Line::from(Span::styled(
        summary,
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Right)
    .render(summary_area, buf);
}

/// Builds the keybinding hint line for the current view.
fn hint_line(view: View) -> Line<'static> {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let hints: &[(&str, &str)] = match view {
        View::Board => &[
            ("[ ]", " Move task  "),
            ("n", " New  "),
            ("d", " Delete  "),
            ("f", " Filter  "),
            ("Tab", " Calendar"),
        ],
        View::Calendar => &[
            ("←→↑↓", " Select day  "),
            ("PgUp/PgDn", " Month  "),
            ("Tab", " Board"),
        ],
    };

    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(*action, text_style));
    }
    Line::from(spans)
}

/// Builds the right-hand summary: active filter plus completion rate.
fn summary_text(filter: &TaskFilter, analytics: &TaskAnalytics) -> String {
    let mut parts = Vec::new();
    if let Some(status) = filter.status {
        parts.push(format!("filter: {}", status.display_name().to_lowercase()));
    }
    if analytics.total > 0 {
        parts.push(format!(
            "{}/{} done ({}%)",
            analytics.completed, analytics.total, analytics.completion_rate
        ));
    }
    parts.join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kanri_protocol::{Task, TaskStatus};

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
    fn board_hints_shown() {
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);

        render_status_bar(
            View::Board,
            &TaskFilter::default(),
            &TaskAnalytics::default(),
            None,
            area,
            &mut buf,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("Move task"));
        assert!(content.contains("Calendar"));
    }

    #[test]
    fn calendar_hints_shown() {
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);

        render_status_bar(
            View::Calendar,
            &TaskFilter::default(),
            &TaskAnalytics::default(),
            None,
            area,
            &mut buf,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("Month"));
        assert!(content.contains("Board"));
    }

    #[test]
    fn message_takes_over_the_bar() {
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);

        render_status_bar(
            View::Board,
            &TaskFilter::default(),
            &TaskAnalytics::default(),
            Some("task title must not be empty"),
            area,
            &mut buf,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("task title must not be empty"));
        assert!(!content.contains("Move task"));
    }

    #[test]
    fn summary_includes_filter_and_completion() {
        let mut done = Task::new("Done");
        done.status = TaskStatus::Done;
        let tasks = vec![done, Task::new("Open")];
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let analytics = TaskAnalytics::compute(&tasks, today);

        let filter = TaskFilter {
            status: Some(TaskStatus::Done),
            ..Default::default()
        };

        let summary = summary_text(&filter, &analytics);
        assert!(summary.contains("filter: done"));
        assert!(summary.contains("1/2 done (50%)"));
    }
}
