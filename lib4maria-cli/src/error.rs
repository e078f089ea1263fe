use lib4maria_lib::LibraryError;
use lib4maria_store::StoreError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The catalog store could not be opened
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// A library operation failed; the message is meant for the user as-is
    #[error("{0}")]
    Library(#[from] LibraryError),

    /// No entry with the given id
    #[error("No entry with id {0}")]
    NotFound(i64),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
