//! Error types for navigation.

use thiserror::Error;

/// Result type for navigation operations.
pub type NavResult<T> = Result<T, NavError>;

/// Errors that can occur while navigating the room graph.
#[derive(Debug, Error)]
pub enum NavError {
    /// The chosen name is not a neighbor of the current room. The engine is
    /// unchanged and the choice may be retried.
    #[error("no connection to \"{0}\" from here")]
    UnrecognizedRoom(String),

    /// A choice was submitted after the end room was reached.
    #[error("the session is already over")]
    SessionOver,

    /// The summary was requested before the end room was reached.
    #[error("the end room has not been reached yet")]
    NotFinished,

    /// The input stream ended before the end room was reached.
    #[error("input closed before reaching the end room")]
    InputClosed,

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
