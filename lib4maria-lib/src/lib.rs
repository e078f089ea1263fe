//! Application layer for the media catalog: the [`Library`] facade that the
//! front end drives, plus shared settings.

pub mod error;
pub mod library;
pub mod settings;

pub use error::LibraryError;
pub use library::Library;
pub use settings::ImportPreference;

use std::path::Path;

use lib4maria_store::{FileStore, StoreError};

/// Open the file-backed library in `data_dir`, creating the directory if needed.
pub fn open_library(data_dir: &Path) -> Result<Library<FileStore>, StoreError> {
    Ok(Library::open(FileStore::open(data_dir)?))
}
