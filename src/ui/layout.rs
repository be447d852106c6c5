use crate::todo::{BulkControls, TaskBoard};
use crate::utils::unicode::display_width;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Columns taken by a row's selection checkbox, `[x] `.
pub const CHECKBOX_WIDTH: u16 = 4;
const CONTROL_GAP: u16 = 2;

pub const UNDO_LABEL: &str = "[↺ undo]";
pub const MARK_DONE_LABEL: &str = "[✓ done]";
pub const DELETE_LABEL: &str = "[✗ delete]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderControl {
    SelectAll,
    Undo,
    MarkDone,
    DeleteSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// "done" on an open task, "undo" on a finished one.
    Toggle,
    Delete,
}

/// What sits under a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Input,
    Header(HeaderControl),
    RowCheckbox(usize),
    RowAction(usize, RowAction),
    Row(usize),
    Nothing,
}

impl Hit {
    pub fn row(&self) -> Option<usize> {
        match *self {
            Hit::RowCheckbox(i) | Hit::RowAction(i, _) | Hit::Row(i) => Some(i),
            _ => None,
        }
    }

    pub fn is_actionable(&self) -> bool {
        !matches!(self, Hit::Row(_) | Hit::Nothing)
    }
}

/// Screen regions of the last rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewLayout {
    pub title: Rect,
    pub input: Rect,
    /// Header line plus rows; the empty-state message fills it when there are no tasks.
    pub body: Rect,
    pub header: Rect,
    pub list: Rect,
    pub status: Rect,
}

impl ViewLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(3), // Text field
                Constraint::Min(1),    // Header + rows
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let body = chunks[2];
        let body_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(body);

        Self {
            title: chunks[0],
            input: chunks[1],
            body,
            header: body_chunks[0],
            list: body_chunks[1],
            status: chunks[3],
        }
    }
}

pub fn select_all_text(controls: &BulkControls) -> String {
    let mark = if controls.all_checked { "x" } else { " " };
    format!("[{}] {}", mark, controls.select_all_label())
}

/// Visible header controls in display order with their text.
pub fn header_segments(controls: &BulkControls) -> Vec<(HeaderControl, String)> {
    let mut segments = vec![(HeaderControl::SelectAll, select_all_text(controls))];
    if controls.show_undo {
        segments.push((HeaderControl::Undo, UNDO_LABEL.to_string()));
    }
    if controls.show_mark_done {
        segments.push((HeaderControl::MarkDone, MARK_DONE_LABEL.to_string()));
    }
    if controls.show_delete {
        segments.push((HeaderControl::DeleteSelected, DELETE_LABEL.to_string()));
    }
    segments
}

pub fn header_gap() -> u16 {
    CONTROL_GAP
}

fn header_control_at(header: Rect, controls: &BulkControls, col: u16) -> Option<HeaderControl> {
    let mut x = header.x;
    for (control, text) in header_segments(controls) {
        let width = display_width(&text) as u16;
        if col >= x && col < x + width {
            return Some(control);
        }
        x += width + CONTROL_GAP;
    }
    None
}

pub fn row_action_labels(done: bool) -> [(RowAction, &'static str); 2] {
    let toggle = if done { UNDO_LABEL } else { MARK_DONE_LABEL };
    [(RowAction::Toggle, toggle), (RowAction::Delete, DELETE_LABEL)]
}

/// Columns the row actions occupy, flush against the right edge of the row.
pub fn row_actions_width(done: bool) -> u16 {
    let labels = row_action_labels(done);
    labels
        .iter()
        .map(|(_, label)| display_width(label) as u16)
        .sum::<u16>()
        + 1
}

fn row_action_at(list: Rect, done: bool, col: u16) -> Option<RowAction> {
    let right = list.x + list.width;
    let mut x = right.saturating_sub(row_actions_width(done));
    for (action, label) in row_action_labels(done) {
        let width = display_width(label) as u16;
        if col >= x && col < x + width {
            return Some(action);
        }
        x += width + 1;
    }
    None
}

fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

/// Maps a terminal cell to the control under it. Row actions only count on
/// the hovered row, since that is the only row that shows them.
pub fn hit_test(
    layout: &ViewLayout,
    board: &TaskBoard,
    list_offset: usize,
    col: u16,
    row: u16,
) -> Hit {
    if contains(layout.input, col, row) {
        return Hit::Input;
    }
    if board.is_empty() {
        return Hit::Nothing;
    }
    if contains(layout.header, col, row) {
        return header_control_at(layout.header, &board.bulk_controls(), col)
            .map_or(Hit::Nothing, Hit::Header);
    }
    if !contains(layout.list, col, row) {
        return Hit::Nothing;
    }

    let index = list_offset + (row - layout.list.y) as usize;
    let Some(task) = board.tasks().get(index) else {
        return Hit::Nothing;
    };

    if col < layout.list.x + CHECKBOX_WIDTH {
        return Hit::RowCheckbox(index);
    }
    if board.hovered_index() == Some(index)
        && let Some(action) = row_action_at(layout.list, task.done, col)
    {
        return Hit::RowAction(index, action);
    }
    Hit::Row(index)
}
