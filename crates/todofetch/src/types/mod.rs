//! Data types decoded from the API

pub mod todo;

pub use todo::Todo;
