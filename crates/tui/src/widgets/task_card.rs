//! Task card rendering widget.
//!
//! Cards are color coded by priority; the status is conveyed by the lane
//! the card sits in.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use kanri_protocol::{Task, TaskPriority};

/// Returns the color associated with a task priority.
///
/// This provides consistent color coding across the application:
///
/// - `Low`: Green - can wait
/// - `Medium`: Yellow - normal work
/// - `High`: Red - should be done first
///
/// # Examples
///
/// ```
/// use kanri_protocol::TaskPriority;
/// use kanri_tui::widgets::priority_color;
/// use ratatui::style::Color;
///
/// assert_eq!(priority_color(TaskPriority::Low), Color::Green);
/// assert_eq!(priority_color(TaskPriority::Medium), Color::Yellow);
/// assert_eq!(priority_color(TaskPriority::High), Color::Red);
/// ```
#[must_use]
pub const fn priority_color(priority: TaskPriority) -> Color {
    match priority {
        TaskPriority::Low => Color::Green,
        TaskPriority::Medium => Color::Yellow,
        TaskPriority::High => Color::Red,
    }
}

/// Returns a brighter version of the priority color for selected cards.
#[must_use]
const fn priority_color_bright(priority: TaskPriority) -> Color {
    match priority {
        TaskPriority::Low => Color::LightGreen,
        TaskPriority::Medium => Color::LightYellow,
        TaskPriority::High => Color::LightRed,
    }
}

/// Renders a task card to the buffer.
///
/// The card shows the title, a truncated description line, and a metadata
/// line (due date and assignee) inside a border colored by priority.
/// Selected cards use brighter colors.
///
/// # Layout
///
/// ```text
/// +------------------+
/// | Title            |
/// | description...   |
/// | Mar 15 · alex    |
/// +------------------+
/// ```
///
/// # Examples
///
/// ```
/// use kanri_protocol::Task;
/// use kanri_tui::widgets::render_task_card;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let task = Task::new("Implement feature");
/// let area = Rect::new(0, 0, 24, 5);
/// let mut buf = Buffer::empty(area);
///
/// render_task_card(&task, false, area, &mut buf);
/// ```
pub fn render_task_card(task: &Task, is_selected: bool, area: Rect, buf: &mut Buffer) {
    // Skip rendering if area is too small
    if area.width < 4 || area.height < 3 {
        return;
    }

    let base_color = priority_color(task.priority);
    let (border_color, title_style, dim_style) = if is_selected {
        (
            priority_color_bright(task.priority),
            Style::default()
                .fg(priority_color_bright(task.priority))
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        )
    } else {
        (
            base_color,
            Style::default().fg(Color::White),
            Style::default().fg(Color::DarkGray),
        )
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let description = truncate_string(task.description.as_deref().unwrap_or(""), inner_width);
    let meta = truncate_string(&meta_line(task), inner_width);

    let content = vec![
        Line::from(Span::styled(&task.title, title_style)),
        Line::from(Span::styled(description, dim_style)),
        Line::from(Span::styled(meta, dim_style)),
    ];

    let card = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: true });

    card.render(area, buf);
}

/// Builds the metadata line: due date and assignee, whichever exist.
fn meta_line(task: &Task) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(due) = &task.due_date {
        parts.push(format!("due {}", due.format("%b %-d")));
    }
    if let Some(assignee) = &task.assigned_to {
        parts.push(assignee.clone());
    }
    parts.join(" · ")
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
