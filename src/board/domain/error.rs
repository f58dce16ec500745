//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,
}

/// Error returned while parsing column identifiers from their storage form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown column identifier: {0}")]
pub struct ParseColumnIdError(pub String);

/// Error returned while parsing task priorities from their storage form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
