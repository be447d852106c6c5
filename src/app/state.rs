use super::input::InputField;
use super::mode::Mode;
use crate::config::Config;
use crate::todo::{TaskBoard, TaskError};
use crate::ui::layout::{HeaderControl, RowAction, ViewLayout};
use crate::ui::theme::Theme;
use crate::utils::cursor::PointerShape;
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub shown_at: Instant,
}

pub struct AppState {
    pub board: TaskBoard,
    pub input: InputField,
    pub mode: Mode,
    pub should_quit: bool,
    pub show_help: bool,
    pub help_scroll: u16,
    pub theme: Theme,
    pub empty_message: String,
    pub status_message: Option<StatusMessage>,
    pub status_timeout: Duration,
    pub list_state: ListState,
    /// Regions of the last rendered frame, used to map mouse events.
    pub layout: ViewLayout,
    /// Shape currently requested from the terminal for the mouse cursor.
    pub pointer_shape: PointerShape,
}

impl AppState {
    pub fn new(board: TaskBoard, theme: Theme, config: &Config) -> Self {
        Self {
            board,
            input: InputField::new(),
            mode: Mode::default(),
            should_quit: false,
            show_help: false,
            help_scroll: 0,
            theme,
            empty_message: config.empty_message.clone(),
            status_message: None,
            status_timeout: Duration::from_secs(config.status_timeout_secs),
            list_state: ListState::default(),
            layout: ViewLayout::default(),
            pointer_shape: PointerShape::Default,
        }
    }

    /// Commits the text field as a new task. Blank input is ignored and left
    /// in the field; accepted input clears it.
    pub fn submit_input(&mut self) {
        match self.board.add(self.input.as_str()) {
            Some(id) => {
                info!(%id, "Task added");
                self.input.clear();
            }
            None => debug!("Ignored blank input"),
        }
    }

    pub fn toggle_selected(&mut self, index: usize) {
        if let Err(e) = self.board.toggle_selected(index) {
            self.report(e);
        }
    }

    pub fn run_row_action(&mut self, index: usize, action: RowAction) {
        let result = match action {
            RowAction::Toggle => self.board.row_action(index).map(|_| ()),
            RowAction::Delete => self.board.remove_task(index).map(|task| {
                info!(id = %task.id, "Task deleted");
            }),
        };
        if let Err(e) = result {
            self.report(e);
        }
        self.sync_list_state();
    }

    /// Runs a header control if it is currently visible.
    pub fn run_header_control(&mut self, control: HeaderControl) {
        let controls = self.board.bulk_controls();
        match control {
            HeaderControl::SelectAll => {
                if !self.board.is_empty() {
                    self.board.toggle_select_all();
                }
            }
            HeaderControl::Undo if controls.show_undo => {
                let count = self.board.mark_selected_undone();
                self.set_status_message(format!("Reopened {}", plural(count)));
            }
            HeaderControl::MarkDone if controls.show_mark_done => {
                let count = self.board.mark_selected_done();
                self.set_status_message(format!("Completed {}", plural(count)));
            }
            HeaderControl::DeleteSelected if controls.show_delete => {
                let count = self.board.delete_selected();
                info!(count, "Deleted selected tasks");
                self.set_status_message(format!("Deleted {}", plural(count)));
                self.sync_list_state();
            }
            _ => debug!(?control, "Header control not available"),
        }
    }

    pub fn hover_next(&mut self) {
        self.board.hover_next();
        self.sync_list_state();
    }

    pub fn hover_prev(&mut self) {
        self.board.hover_prev();
        self.sync_list_state();
    }

    pub fn hover_row(&mut self, index: Option<usize>) {
        match index {
            Some(index) => {
                if self.board.hover(index).is_err() {
                    self.board.clear_hover();
                }
            }
            None => self.board.clear_hover(),
        }
        self.sync_list_state();
    }

    /// Keeps the list widget's highlight on the hovered row.
    pub fn sync_list_state(&mut self) {
        self.list_state.select(self.board.hovered_index());
    }

    pub fn report(&mut self, error: TaskError) {
        warn!(%error, "Rejected task operation");
        self.status_message = Some(StatusMessage {
            text: error.to_string(),
            kind: StatusKind::Error,
            shown_at: Instant::now(),
        });
    }

    pub fn set_status_message(&mut self, text: String) {
        self.status_message = Some(StatusMessage {
            text,
            kind: StatusKind::Info,
            shown_at: Instant::now(),
        });
    }

    pub fn visible_status_message(&self) -> Option<&StatusMessage> {
        self.status_message
            .as_ref()
            .filter(|message| message.shown_at.elapsed() <= self.status_timeout)
    }

    pub fn clear_expired_status_message(&mut self) {
        if self.visible_status_message().is_none() {
            self.status_message = None;
        }
    }
}

fn plural(count: usize) -> String {
    if count == 1 {
        "1 task".to_string()
    } else {
        format!("{count} tasks")
    }
}
