use super::item::TaskId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("task index {index} out of range (list has {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no task with id {0}")]
    UnknownTask(TaskId),
}
