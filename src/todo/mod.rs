pub mod board;
pub mod error;
pub mod item;
pub mod list;
pub mod selection;

pub use board::{BulkControls, TaskBoard};
pub use error::TaskError;
pub use item::{Task, TaskId};
pub use list::TaskList;
pub use selection::Selection;
