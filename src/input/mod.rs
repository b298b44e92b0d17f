//! Loader for the `before|after` / comma-separated update text format.

mod error;
mod queue;

pub use error::{LoadError, ParseError};
pub use queue::PrintQueue;
