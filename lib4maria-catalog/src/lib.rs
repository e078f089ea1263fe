//! Media catalog data model, import validation, and collection operations.
//!
//! This crate has no storage or I/O. `lib4maria-store` persists the types
//! defined here and `lib4maria-import` moves them in and out of backup files.

pub mod catalog;
pub mod clock;
pub mod engine;
pub mod seed;
pub mod types;
pub mod validate;

pub use catalog::Catalog;
pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::ViewCounts;
pub use seed::seed_entries;
pub use types::*;
pub use validate::is_valid_entry;
