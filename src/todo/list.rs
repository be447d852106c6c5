use super::error::TaskError;
use super::item::{Task, TaskId};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct TaskList {
    pub items: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends a new task unless the label is blank after trimming.
    /// The label is stored untrimmed.
    pub fn add(&mut self, label: &str) -> Option<TaskId> {
        if label.trim().is_empty() {
            debug!("Rejected blank task label");
            return None;
        }
        let task = Task::new(label.to_string());
        let id = task.id;
        self.items.push(task);
        debug!(%id, len = self.items.len(), "Added task");
        Some(id)
    }

    pub fn remove(&mut self, index: usize) -> Result<Task, TaskError> {
        self.check_index(index)?;
        let task = self.items.remove(index);
        debug!(id = %task.id, index, "Removed task");
        Ok(task)
    }

    pub fn toggle_done(&mut self, index: usize) -> Result<bool, TaskError> {
        self.check_index(index)?;
        let task = &mut self.items[index];
        task.toggle_done();
        debug!(id = %task.id, done = task.done, "Toggled task");
        Ok(task.done)
    }

    pub fn set_done(&mut self, index: usize, value: bool) -> Result<(), TaskError> {
        self.check_index(index)?;
        self.items[index].done = value;
        Ok(())
    }

    pub fn set_done_by_id(&mut self, id: TaskId, value: bool) -> Result<(), TaskError> {
        let index = self.index_of(id).ok_or(TaskError::UnknownTask(id))?;
        self.set_done(index, value)
    }

    /// Removes every task matching `pred`, returning the removed tasks in list order.
    pub fn remove_where<F>(&mut self, mut pred: F) -> Vec<Task>
    where
        F: FnMut(&Task) -> bool,
    {
        let (removed, kept): (Vec<Task>, Vec<Task>) =
            self.items.drain(..).partition(|task| pred(task));
        self.items = kept;
        removed
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.items.get(index)
    }

    pub fn get_by_id(&self, id: TaskId) -> Option<&Task> {
        self.items.iter().find(|task| task.id == id)
    }

    pub fn index_of(&self, id: TaskId) -> Option<usize> {
        self.items.iter().position(|task| task.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.items.iter().map(|task| task.id)
    }

    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|task| task.done).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<(), TaskError> {
        if index >= self.items.len() {
            return Err(TaskError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_list(labels: &[&str]) -> TaskList {
        let mut list = TaskList::new();
        for label in labels {
            list.add(label);
        }
        list
    }

    #[test]
    fn test_new() {
        let list = TaskList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_add_appends_undone_task() {
        let mut list = TaskList::new();
        let id = list.add("Buy milk");

        assert!(id.is_some());
        assert_eq!(list.len(), 1);
        assert_eq!(list.items[0].label, "Buy milk");
        assert!(!list.items[0].done);
        assert_eq!(list.items[0].id, id.unwrap());
    }

    #[test]
    fn test_add_whitespace_only_is_rejected() {
        let mut list = create_test_list(&["Existing"]);
        assert_eq!(list.add("  "), None);
        assert_eq!(list.add(""), None);
        assert_eq!(list.add("\t\n"), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_keeps_label_untrimmed() {
        let mut list = TaskList::new();
        list.add("  padded  ");
        assert_eq!(list.items[0].label, "  padded  ");
    }

    #[test]
    fn test_add_appends_to_end() {
        let list = create_test_list(&["Task 1", "Task 2", "Task 3"]);
        let labels: Vec<_> = list.items.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Task 1", "Task 2", "Task 3"]);
    }

    #[test]
    fn test_remove_shifts_later_tasks() {
        let mut list = create_test_list(&["Task 1", "Task 2", "Task 3"]);

        let removed = list.remove(1).unwrap();
        assert_eq!(removed.label, "Task 2");
        assert_eq!(list.len(), 2);
        assert_eq!(list.items[1].label, "Task 3");
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut list = create_test_list(&["Task 1"]);
        assert_eq!(
            list.remove(1).unwrap_err(),
            TaskError::IndexOutOfRange { index: 1, len: 1 }
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_length_tracks_adds_minus_removes() {
        let mut list = TaskList::new();
        let mut accepted = 0;
        for label in ["a", " ", "b", "", "c", "d"] {
            if list.add(label).is_some() {
                accepted += 1;
            }
        }
        list.remove(0).unwrap();
        list.remove(2).unwrap();
        assert!(list.remove(5).is_err());

        assert_eq!(list.len(), accepted - 2);
    }

    #[test]
    fn test_toggle_done_is_involution() {
        let mut list = create_test_list(&["Task 1", "Task 2"]);

        assert!(list.toggle_done(0).unwrap());
        assert!(list.items[0].done);
        assert!(!list.items[1].done);

        assert!(!list.toggle_done(0).unwrap());
        assert!(!list.items[0].done);
    }

    #[test]
    fn test_toggle_done_out_of_range() {
        let mut list = TaskList::new();
        assert!(matches!(
            list.toggle_done(0),
            Err(TaskError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_set_done_explicit() {
        let mut list = create_test_list(&["Task"]);
        list.set_done(0, true).unwrap();
        list.set_done(0, true).unwrap();
        assert!(list.items[0].done);
        list.set_done(0, false).unwrap();
        assert!(!list.items[0].done);
    }

    #[test]
    fn test_set_done_by_unknown_id() {
        let mut list = create_test_list(&["Task"]);
        let stranger = TaskId::new();
        assert_eq!(
            list.set_done_by_id(stranger, true),
            Err(TaskError::UnknownTask(stranger))
        );
    }

    #[test]
    fn test_index_of_follows_removals() {
        let mut list = create_test_list(&["Task 1", "Task 2", "Task 3"]);
        let third = list.items[2].id;

        list.remove(0).unwrap();
        assert_eq!(list.index_of(third), Some(1));
        assert_eq!(list.get_by_id(third).map(|t| t.label.as_str()), Some("Task 3"));
    }

    #[test]
    fn test_remove_where_preserves_order() {
        let mut list = create_test_list(&["a", "b", "c", "d"]);
        list.set_done(1, true).unwrap();
        list.set_done(3, true).unwrap();

        let removed = list.remove_where(|t| t.done);
        let removed: Vec<_> = removed.iter().map(|t| t.label.as_str()).collect();
        let kept: Vec<_> = list.items.iter().map(|t| t.label.as_str()).collect();

        assert_eq!(removed, vec!["b", "d"]);
        assert_eq!(kept, vec!["a", "c"]);
    }

    #[test]
    fn test_done_count() {
        let mut list = create_test_list(&["a", "b", "c"]);
        list.set_done(0, true).unwrap();
        list.set_done(2, true).unwrap();
        assert_eq!(list.done_count(), 2);
    }
}
