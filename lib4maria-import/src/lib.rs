//! Backup export and import for the media catalog.
//!
//! This crate owns the portable document format: writing the catalog out,
//! validating documents that come back in, assigning fresh ids, and merging
//! or replacing the existing collection.

pub mod export;
pub mod merge;
pub mod parse;
pub mod session;

pub use export::{EXPORT_FILE_NAME, ExportError, export_document, write_export};
pub use merge::{ImportMode, ImportOutcome, apply, merge_additive, replace_all};
pub use parse::{ImportError, ImportStats, ParsedImport, parse_document, parse_import};
pub use session::{ImportSession, ImportTicket};
