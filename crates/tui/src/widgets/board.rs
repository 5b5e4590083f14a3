//! Kanban board rendering widget.
//!
//! Renders the three lanes side by side with collapsed shared borders.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
};

use kanri_protocol::{BoardView, TaskStatus};

use super::lane::{LanePosition, render_lane};

/// Renders the complete Kanban board to the buffer.
///
/// The board displays the three lanes (To Do, In Progress, Done) arranged
/// horizontally with equal widths. The focused lane and the selected card
/// within it are highlighted.
///
/// # Layout
///
/// ```text
/// +------------+------------+------------+
/// | To Do      | In Progress| Done       |
/// +------------+------------+------------+
/// | Task 1     | Task 3     | Task 4     |
/// | Task 2     |            |            |
/// +------------+------------+------------+
/// ```
///
/// # Examples
///
/// ```
/// use kanri_protocol::{BoardView, Task};
/// use kanri_tui::widgets::render_board;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let board = BoardView::partition(vec![Task::new("Task 1")]);
///
/// let area = Rect::new(0, 0, 80, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_board(&board, 0, Some(0), area, &mut buf);
/// ```
pub fn render_board(
    board: &BoardView,
    selected_lane: usize,
    selected_task: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
) {
    // Split into 3 equal columns for the lanes
    let lane_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let lane_count = TaskStatus::all().len();
    for (i, status) in TaskStatus::all().iter().enumerate() {
        let lane = board.lane(*status);
        let is_focused = selected_lane == i;

        // Only show task selection in the focused lane
        let task_selection = if is_focused { selected_task } else { None };

        let position = if i == 0 {
            LanePosition::First
        } else if i == lane_count - 1 {
            LanePosition::Last
        } else {
            LanePosition::Middle
        };

        // Whether the previous lane is focused (for shared border coloring)
        let prev_focused = i > 0 && selected_lane == i - 1;

        render_lane(
            lane,
            is_focused,
            task_selection,
            lane_areas[i],
            buf,
            position,
            prev_focused,
        );
    }
}
