//! API resource endpoints

pub mod todos;

pub use todos::Todos;
