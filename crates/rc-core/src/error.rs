use std::path::PathBuf;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while building, loading, or saving a room graph.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The name pool holds fewer distinct names than there are rooms.
    #[error("name pool has {available} distinct names, {required} required")]
    InsufficientNames {
        /// Distinct names in the pool.
        available: usize,
        /// Names needed to label every room.
        required: usize,
    },

    /// A room record refers to a room name that does not exist.
    #[error("unknown room: \"{0}\"")]
    UnknownRoom(String),

    /// A set of rooms violates a graph invariant.
    #[error("invalid room graph: {0}")]
    InvalidGraph(String),

    /// Reading or writing a room file failed.
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A room file could not be encoded or decoded.
    #[error("malformed room file {}: {source}", .path.display())]
    Format {
        /// The offending file.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}
