pub mod cursor;
pub mod paths;
pub mod unicode;
