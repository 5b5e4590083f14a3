//! Calendar rendering widget.
//!
//! Renders the month grid next to the task list for the selected date.
//! Days outside the displayed month are dimmed; days with at least one
//! task due are underlined.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use kanri_calendar::MonthGrid;
use kanri_protocol::Task;

use super::task_card::priority_color;

/// Width of the month grid panel (7 columns of 4 cells plus borders).
const GRID_PANEL_WIDTH: u16 = 30;

/// Renders the calendar view: the month grid on the left and the
/// selected-date task list on the right.
///
/// # Arguments
///
/// * `grid` - The displayed month grid
/// * `selected` - The selected calendar date
/// * `today` - Today's date, highlighted in the grid
/// * `busy_dates` - The dates that have at least one task due
/// * `due_tasks` - The tasks due on the selected date, in store order
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
///
/// use chrono::NaiveDate;
/// use kanri_calendar::{MonthGrid, WeekStart};
/// use kanri_tui::widgets::render_calendar;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let grid = MonthGrid::new(date, WeekStart::Sunday);
///
/// let area = Rect::new(0, 0, 80, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_calendar(&grid, date, date, &HashSet::new(), &[], area, &mut buf);
/// ```
pub fn render_calendar(
    grid: &MonthGrid,
    selected: NaiveDate,
    today: NaiveDate,
    busy_dates: &HashSet<NaiveDate>,
    due_tasks: &[&Task],
    area: Rect,
    buf: &mut Buffer,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(GRID_PANEL_WIDTH), Constraint::Min(0)])
        .split(area);

    render_month_grid(grid, selected, today, busy_dates, chunks[0], buf);
    render_day_panel(selected, due_tasks, chunks[1], buf);
}

/// Renders the month grid panel.
fn render_month_grid(
    grid: &MonthGrid,
    selected: NaiveDate,
    today: NaiveDate,
    busy_dates: &HashSet<NaiveDate>,
    area: Rect,
    buf: &mut Buffer,
) {
    let title = format!(" {} ", grid.month().format("%B %Y"));
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let mut lines = Vec::new();

    // Weekday header row
    let header_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);
    let header: Vec<Span> = grid
        .week_start()
        .weekday_labels()
        .iter()
        .map(|label| Span::styled(format!("{label:>3} "), header_style))
        .collect();
    lines.push(Line::from(header));

    for week in grid.weeks() {
        let mut spans = Vec::new();
        for day in week {
            let style = day_style(day.date, day.in_month, selected, today, busy_dates);
            spans.push(Span::styled(format!("{:>3} ", day.date.day()), style));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(block);
    paragraph.render(area, buf);
}

/// Picks the style for one day cell.
fn day_style(
    date: NaiveDate,
    in_month: bool,
    selected: NaiveDate,
    today: NaiveDate,
    busy_dates: &HashSet<NaiveDate>,
) -> Style {
    if date == selected {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
    }
    if date == today {
        return Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
    }

    let mut style = if in_month {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    if busy_dates.contains(&date) {
        style = style.fg(Color::Yellow).add_modifier(Modifier::UNDERLINED);
    }
    style
}

/// Renders the selected-date task list panel.
fn render_day_panel(selected: NaiveDate, due_tasks: &[&Task], area: Rect, buf: &mut Buffer) {
    let title = format!(" Tasks due {} ", selected.format("%B %-d, %Y"));
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(Color::White)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let lines: Vec<Line> = if due_tasks.is_empty() {
        vec![Line::from(Span::styled(
            "No tasks for this date",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))]
    } else {
        due_tasks
            .iter()
            .map(|task| {
                Line::from(vec![
                    Span::styled(
                        format!("[{}] ", task.priority.display_name().to_lowercase()),
                        Style::default().fg(priority_color(task.priority)),
                    ),
                    Span::styled(&task.title, Style::default().fg(Color::White)),
                    Span::styled(
                        format!(" ({})", task.status.display_name()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect()
    };

    let paragraph = Paragraph::new(lines).block(block);
    paragraph.render(area, buf);
}
