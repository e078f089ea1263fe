//! Single-flight guard around reading an import file.
//!
//! Reading the file is the only asynchronous step of an import. A session
//! allows one import at a time: a second [`ImportSession::begin`] while a
//! ticket is alive is rejected rather than interleaved.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use lib4maria_catalog::Clock;

use crate::parse::{ImportError, ParsedImport, parse_document};

#[derive(Debug, Clone, Default)]
pub struct ImportSession {
    busy: Arc<AtomicBool>,
}

impl ImportSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the session. The claim is released when the ticket is dropped.
    pub fn begin(&self) -> Result<ImportTicket, ImportError> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ImportError::ImportInProgress)?;
        log::debug!("Import session claimed");
        Ok(ImportTicket {
            busy: Arc::clone(&self.busy),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Claim the session, read `path`, and parse it.
    pub async fn import_file(
        &self,
        path: &Path,
        clock: &dyn Clock,
    ) -> Result<ParsedImport, ImportError> {
        let ticket = self.begin()?;
        let raw = ticket.read_document(path).await?;
        parse_document(&raw, clock)
    }
}

/// Proof that this caller holds the session's single import slot.
#[derive(Debug)]
pub struct ImportTicket {
    busy: Arc<AtomicBool>,
}

impl ImportTicket {
    /// Read the whole file as UTF-8 text.
    pub async fn read_document(&self, path: &Path) -> Result<String, ImportError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ImportError::FileReadFailure {
                path: path.display().to_string(),
                source,
            })
    }
}

impl Drop for ImportTicket {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
        log::debug!("Import session released");
    }
}
