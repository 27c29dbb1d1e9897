//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The board identifier is empty after trimming.
    #[error("board id must not be empty")]
    EmptyBoardId,

    /// The column identifier is empty after trimming.
    #[error("column id must not be empty")]
    EmptyColumnId,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,
}

/// Error returned while parsing tag labels.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown tag: {0}")]
pub struct ParseTagError(pub String);
