use super::error::TaskError;
use super::item::{Task, TaskId};
use super::list::TaskList;
use super::selection::Selection;
use tracing::debug;

pub const SELECT_ALL_LABEL: &str = "Select All";
pub const UNCHECK_ALL_LABEL: &str = "Uncheck All";

/// Which header controls are visible for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkControls {
    /// Checked state of the select-all toggle.
    pub all_checked: bool,
    pub show_undo: bool,
    pub show_mark_done: bool,
    pub show_delete: bool,
}

impl BulkControls {
    pub fn select_all_label(&self) -> &'static str {
        if self.all_checked {
            UNCHECK_ALL_LABEL
        } else {
            SELECT_ALL_LABEL
        }
    }

    pub fn any_bulk_action(&self) -> bool {
        self.show_undo || self.show_mark_done || self.show_delete
    }
}

/// The task list together with the selection and hover state that point into it.
///
/// All mutations go through here so the selection and hover never reference a
/// task that is no longer in the list.
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: TaskList,
    selection: Selection,
    hovered: Option<TaskId>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn add(&mut self, label: &str) -> Option<TaskId> {
        self.tasks.add(label)
    }

    /// Row delete. Drops the task from the selection. If it was the hovered
    /// task, hover moves to the row that takes its place.
    pub fn remove_task(&mut self, index: usize) -> Result<Task, TaskError> {
        let task = self.tasks.remove(index)?;
        self.selection.remove(task.id);
        if self.hovered == Some(task.id) {
            self.hovered = self
                .tasks
                .get(index.min(self.tasks.len().saturating_sub(1)))
                .map(|next| next.id);
        }
        Ok(task)
    }

    pub fn toggle_done(&mut self, index: usize) -> Result<bool, TaskError> {
        self.tasks.toggle_done(index)
    }

    pub fn set_done(&mut self, index: usize, value: bool) -> Result<(), TaskError> {
        self.tasks.set_done(index, value)
    }

    /// The inline row action: "undo" on a done task, "done" otherwise.
    /// Returns the task's new done flag.
    pub fn row_action(&mut self, index: usize) -> Result<bool, TaskError> {
        let done = self
            .tasks
            .get(index)
            .map(|task| task.done)
            .ok_or(TaskError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            })?;
        if done {
            self.tasks.set_done(index, false)?;
            Ok(false)
        } else {
            self.tasks.toggle_done(index)
        }
    }

    pub fn toggle_selected(&mut self, index: usize) -> Result<bool, TaskError> {
        let id = self.id_at(index)?;
        let selected = self.selection.toggle(id);
        debug!(%id, selected, "Toggled selection");
        Ok(selected)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.tasks
            .get(index)
            .is_some_and(|task| self.selection.contains(task.id))
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(self.tasks.ids());
        debug!(count = self.selection.len(), "Selected all tasks");
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Header checkbox: deselects everything when all tasks are selected,
    /// otherwise selects everything.
    pub fn toggle_select_all(&mut self) {
        if self.all_selected() {
            self.clear_selection();
        } else {
            self.select_all();
        }
    }

    pub fn all_selected(&self) -> bool {
        !self.tasks.is_empty() && self.selection.len() == self.tasks.len()
    }

    pub fn all_selected_done(&self) -> bool {
        self.selection_all(|task| task.done)
    }

    pub fn all_selected_undone(&self) -> bool {
        self.selection_all(|task| !task.done)
    }

    pub fn bulk_controls(&self) -> BulkControls {
        BulkControls {
            all_checked: self.all_selected(),
            show_undo: self.all_selected_done(),
            show_mark_done: self.all_selected_undone(),
            show_delete: !self.selection.is_empty(),
        }
    }

    /// Removes every selected task and empties the selection. Returns the
    /// number of tasks removed.
    pub fn delete_selected(&mut self) -> usize {
        let selection = &self.selection;
        let removed = self.tasks.remove_where(|task| selection.contains(task.id));
        if let Some(hovered) = self.hovered
            && removed.iter().any(|task| task.id == hovered)
        {
            self.hovered = None;
        }
        self.selection.clear();
        debug!(count = removed.len(), "Deleted selected tasks");
        removed.len()
    }

    pub fn mark_selected_done(&mut self) -> usize {
        self.mark_selected(true)
    }

    pub fn mark_selected_undone(&mut self) -> usize {
        self.mark_selected(false)
    }

    pub fn hover(&mut self, index: usize) -> Result<(), TaskError> {
        let id = self.id_at(index)?;
        self.hover_id(id)
    }

    pub fn hover_id(&mut self, id: TaskId) -> Result<(), TaskError> {
        if self.tasks.get_by_id(id).is_none() {
            return Err(TaskError::UnknownTask(id));
        }
        self.hovered = Some(id);
        Ok(())
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered.and_then(|id| self.tasks.index_of(id))
    }

    /// Moves hover one row down, starting at the first row when nothing is hovered.
    pub fn hover_next(&mut self) {
        let next = match self.hovered_index() {
            Some(index) => (index + 1).min(self.tasks.len().saturating_sub(1)),
            None => 0,
        };
        let _ = self.hover(next);
    }

    /// Moves hover one row up, starting at the last row when nothing is hovered.
    pub fn hover_prev(&mut self) {
        let prev = match self.hovered_index() {
            Some(index) => index.saturating_sub(1),
            None => self.tasks.len().saturating_sub(1),
        };
        let _ = self.hover(prev);
    }

    fn mark_selected(&mut self, value: bool) -> usize {
        let selected: Vec<TaskId> = self.selection.iter().collect();
        let mut count = 0;
        for id in selected {
            if self.tasks.set_done_by_id(id, value).is_ok() {
                count += 1;
            }
        }
        debug!(count, done = value, "Marked selected tasks");
        count
    }

    fn selection_all<F>(&self, pred: F) -> bool
    where
        F: Fn(&Task) -> bool,
    {
        !self.selection.is_empty()
            && self
                .selection
                .iter()
                .all(|id| self.tasks.get_by_id(id).is_some_and(&pred))
    }

    fn id_at(&self, index: usize) -> Result<TaskId, TaskError> {
        self.tasks
            .get(index)
            .map(|task| task.id)
            .ok_or(TaskError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            })
    }
}
