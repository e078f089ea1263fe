//! Backup document writer.

use std::path::Path;

use lib4maria_catalog::MediaEntry;
use serde::Serialize;
use thiserror::Error;

/// Default file name offered for a backup.
pub const EXPORT_FILE_NAME: &str = "library4maria-backup.json";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode catalog: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BackupDocument<'a> {
    media_items: &'a [MediaEntry],
}

/// Render the catalog as `{ "mediaItems": [...] }`, pretty-printed with
/// two-space indentation. [`parse_import`](crate::parse_import) reads it back.
pub fn export_document(entries: &[MediaEntry]) -> Result<String, ExportError> {
    let doc = BackupDocument {
        media_items: entries,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Write the backup document to `path`, replacing any existing file.
pub fn write_export(path: &Path, entries: &[MediaEntry]) -> Result<(), ExportError> {
    let contents = export_document(entries)?;
    let io_err = |p: &Path, source| ExportError::Io {
        path: p.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, contents).map_err(|e| io_err(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| io_err(path, e))?;
    log::debug!("Exported {} entries to {}", entries.len(), path.display());
    Ok(())
}
