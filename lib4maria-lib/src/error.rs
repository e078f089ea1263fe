use lib4maria_catalog::DraftError;
use lib4maria_import::{ExportError, ImportError};
use lib4maria_store::StoreError;
use thiserror::Error;

/// Failures a user-facing operation can report. Every variant renders as a
/// message fit to show the user as-is.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The creation form is incomplete
    #[error("Cannot add media: {0}")]
    InvalidDraft(#[from] DraftError),

    /// Import failed; the catalog is unchanged
    #[error("Error importing file: {0}")]
    Import(#[from] ImportError),

    /// Export failed
    #[error("Failed to export data. Please try again. ({0})")]
    Export(#[from] ExportError),

    /// Clearing the store failed; the catalog is unchanged
    #[error("Failed to clear data. Please try again. ({0})")]
    Clear(#[source] StoreError),
}
