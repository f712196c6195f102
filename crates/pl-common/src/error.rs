//! Error types for Process Lens.

use thiserror::Error;

/// Result type alias for Process Lens operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Process Lens.
///
/// Failures are ordinary return values; an operation either populates every
/// requested output or returns one of these, never a partial result.
#[derive(Error, Debug)]
pub enum Error {
    /// The per-process record is absent, or the process no longer exists.
    #[error("process {pid} not found")]
    NotFound { pid: u32 },

    /// The OS refused access to the per-process record.
    #[error("permission denied accessing process {pid}")]
    AccessDenied { pid: u32 },

    /// The record was present but did not match the expected schema.
    #[error("malformed record for process {pid}: {reason}")]
    Parse { pid: u32, reason: String },

    /// Buffer growth was refused while accumulating a record.
    #[error("allocation failed while reading process {pid}")]
    Allocation { pid: u32 },

    /// Residual I/O failure outside the classes above.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Classify a failed open of a per-process record.
    pub fn from_open(pid: u32, err: std::io::Error) -> Error {
        match err.kind() {
            std::io::ErrorKind::NotFound => Error::NotFound { pid },
            std::io::ErrorKind::PermissionDenied => Error::AccessDenied { pid },
            _ => Error::Io(err),
        }
    }
}
