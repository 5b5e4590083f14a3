//! Lane rendering widget.
//!
//! Renders a single Kanban lane: a header with the lane name and task
//! count, then a scrollable column of task cards.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use kanri_protocol::Lane;

use super::task_card::render_task_card;

/// Position of a lane in the horizontal layout.
///
/// Used to determine which borders to render for each lane, enabling
/// collapsed borders between adjacent lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanePosition {
    /// First (leftmost) lane - has left border with rounded corners.
    First,
    /// Middle lane - has left border with T-connectors.
    Middle,
    /// Last (rightmost) lane - has both borders, rounded on right.
    Last,
}

/// Border set for the first (leftmost) lane: rounded corners on left, no right border.
const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for middle lanes: T-connectors on left, no right border.
const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the last (rightmost) lane: T-connectors on left, rounded on right.
const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Height of each task card in rows.
const TASK_CARD_HEIGHT: u16 = 5;

/// Renders a single lane to the buffer.
///
/// The header shows the lane name and task count; empty lanes show a
/// "No tasks" placeholder. When more cards exist than fit, the list
/// scrolls to keep the selected card visible.
///
/// # Arguments
///
/// * `lane` - The lane to render
/// * `is_focused` - Whether this lane currently has focus
/// * `selected_idx` - Index of the selected task within this lane, if any
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
/// * `position` - The lane's position, used to collapse shared borders
/// * `prev_focused` - Whether the lane to the left is focused, for
///   coloring the shared border
///
/// # Examples
///
/// ```
/// use kanri_protocol::{Lane, Task, TaskStatus};
/// use kanri_tui::widgets::{LanePosition, render_lane};
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let mut lane = Lane::new(TaskStatus::Todo);
/// lane.tasks.push(Task::new("Task 1"));
///
/// let area = Rect::new(0, 0, 25, 15);
/// let mut buf = Buffer::empty(area);
///
/// render_lane(&lane, true, Some(0), area, &mut buf, LanePosition::First, false);
/// ```
pub fn render_lane(
    lane: &Lane,
    is_focused: bool,
    selected_idx: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
    position: LanePosition,
    prev_focused: bool,
) {
    // For the left border (shared with the previous lane), highlight if
    // either lane is focused.
    let left_border_highlighted = is_focused || prev_focused;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = format!("{} ({})", lane.status.display_name(), lane.len());
    let title_style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    // Collapse borders between adjacent lanes: every lane draws its LEFT
    // border; only the last lane draws a RIGHT border.
    let borders = match position {
        LanePosition::First | LanePosition::Middle => Borders::TOP | Borders::BOTTOM | Borders::LEFT,
        LanePosition::Last => Borders::ALL,
    };

    let border_set = match position {
        LanePosition::First => BORDER_SET_FIRST,
        LanePosition::Middle => BORDER_SET_MIDDLE,
        LanePosition::Last => BORDER_SET_LAST,
    };

    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(borders)
        .border_set(border_set)
        .border_style(border_style);

    let inner_area = block.inner(area);
    block.render(area, buf);

    // The shared border was drawn gray if this lane is unfocused; recolor
    // it when the neighbor owns the focus.
    if left_border_highlighted && !is_focused && area.width > 0 {
        let highlight_style = Style::default().fg(Color::Cyan);
        let x = area.x;
        for y in area.y..area.y.saturating_add(area.height) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(highlight_style);
            }
        }
    }

    if lane.is_empty() {
        render_empty_placeholder(inner_area, buf);
        return;
    }

    // How many cards fit in the visible area
    let visible_tasks = (inner_area.height / TASK_CARD_HEIGHT).max(1) as usize;
    let scroll_offset = calculate_scroll_offset(selected_idx, lane.len(), visible_tasks);

    let task_count = lane.len().min(visible_tasks);
    let mut constraints: Vec<Constraint> = (0..task_count)
        .map(|_| Constraint::Length(TASK_CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0)); // Fill remaining space

    let task_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner_area);

    for (i, task_area) in task_areas.iter().take(task_count).enumerate() {
        let task_idx = scroll_offset + i;
        if task_idx >= lane.tasks.len() {
            break;
        }

        let task = &lane.tasks[task_idx];
        let is_selected = is_focused && selected_idx == Some(task_idx);

        render_task_card(task, is_selected, *task_area, buf);
    }
}

/// Renders a placeholder message for empty lanes.
fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "No tasks",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    placeholder.render(area, buf);
}

/// Calculates the scroll offset so the selected card stays visible.
///
/// The list scrolls just far enough that the selection sits on the last
/// visible row; with no selection (or everything fitting) it stays at the
/// top.
fn calculate_scroll_offset(
    selected_idx: Option<usize>,
    total_tasks: usize,
    visible_tasks: usize,
) -> usize {
    let Some(selected) = selected_idx else {
        return 0;
    };

    if total_tasks <= visible_tasks {
        return 0;
    }

    let max_offset = total_tasks - visible_tasks;
    selected
        .saturating_sub(visible_tasks.saturating_sub(1))
        .min(max_offset)
}
