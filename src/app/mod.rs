pub mod event;
pub mod input;
pub mod mode;
pub mod state;

pub use state::AppState;
