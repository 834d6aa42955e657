//! Error Types

use thiserror::Error;

/// Internal invariant violations of the todo list.
///
/// None of these are user errors; the view treats them as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("no todo item with id `{id}`")]
    UnknownItem { id: String },
}
