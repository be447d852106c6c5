pub mod app;
pub mod config;
pub mod todo;
pub mod ui;
pub mod utils;
