//! Catalog persistence on top of a [`KeyValueStore`].
//!
//! Three pieces of state live under fixed keys: the catalog, the kind filter,
//! and the favorites-only flag. Each is written through on every change and
//! each falls back to its own default on load, so a crash between two writes
//! only costs the newest change to one of them.

use lib4maria_catalog::{KindFilter, MediaEntry, seed_entries};
use serde_json::Value;

use crate::kv::{KeyValueStore, StoreError};

/// Key holding the catalog as a JSON array of entries.
pub const CATALOG_KEY: &str = "lib4maria-data";
/// Key holding the kind filter: `all`, `movie` or `series`.
pub const FILTER_KEY: &str = "lib4maria-filter";
/// Key holding the favorites-only flag: `true` or `false`.
pub const FAVORITES_KEY: &str = "lib4maria-favorites";

/// Every key owned by [`LibraryStore`]; [`LibraryStore::clear_all`] removes these.
pub const OWNED_KEYS: [&str; 3] = [CATALOG_KEY, FILTER_KEY, FAVORITES_KEY];

// ── Failure policy ──────────────────────────────────────────────────────────

/// Operations offered by [`LibraryStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    LoadCatalog,
    SaveCatalog,
    LoadFilter,
    SaveFilter,
    LoadFavorites,
    SaveFavorites,
    ClearAll,
}

/// What happens when the underlying store fails during an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log at warn level and carry on with a default (loads) or nothing (saves).
    /// In-memory state may then differ from what is persisted.
    Swallow,
    /// Return the error to the caller.
    Report,
}

impl StoreOp {
    pub const fn failure_policy(self) -> FailurePolicy {
        match self {
            Self::LoadCatalog
            | Self::SaveCatalog
            | Self::LoadFilter
            | Self::SaveFilter
            | Self::LoadFavorites
            | Self::SaveFavorites => FailurePolicy::Swallow,
            Self::ClearAll => FailurePolicy::Report,
        }
    }
}

fn swallow(op: StoreOp, err: &StoreError) {
    debug_assert_eq!(op.failure_policy(), FailurePolicy::Swallow);
    log::warn!("{:?} failed, continuing: {}", op, err);
}

// ── Catalog decoding ────────────────────────────────────────────────────────

/// Why the seed collection was used instead of stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedReason {
    /// Nothing stored yet (first run).
    Missing,
    /// Something was stored but could not be read or decoded.
    Corrupt,
}

/// Where a loaded catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    Stored,
    Seeded(SeedReason),
}

/// Result of [`LibraryStore::load_catalog`].
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedCatalog {
    pub entries: Vec<MediaEntry>,
    pub origin: CatalogOrigin,
    /// Stored entries skipped because they could not be decoded.
    pub dropped: usize,
}

impl LoadedCatalog {
    fn seeded(reason: SeedReason) -> Self {
        Self {
            entries: seed_entries(),
            origin: CatalogOrigin::Seeded(reason),
            dropped: 0,
        }
    }
}

/// Decode a stored catalog document: a bare array, or an object with a
/// `mediaItems` array. Entries that do not decode are skipped and counted.
///
/// Returns `None` if the text is not JSON or has neither shape.
pub fn decode_catalog(text: &str) -> Option<(Vec<MediaEntry>, usize)> {
    let doc: Value = serde_json::from_str(text).ok()?;
    let items = match doc {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("mediaItems") {
            Some(Value::Array(items)) => items,
            _ => return None,
        },
        _ => return None,
    };

    let mut dropped = 0;
    let entries = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<MediaEntry>(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping stored entry #{}: {}", index, e);
                dropped += 1;
                None
            }
        })
        .collect();
    Some((entries, dropped))
}

// ── Store adapter ───────────────────────────────────────────────────────────

/// Reads and writes catalog state, isolating callers from storage failures
/// according to [`StoreOp::failure_policy`].
#[derive(Debug, Clone)]
pub struct LibraryStore<S> {
    store: S,
}

impl<S: KeyValueStore> LibraryStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Load the catalog. Never fails: missing or unreadable data yields the
    /// seed collection, with [`LoadedCatalog::origin`] saying which case applied.
    pub fn load_catalog(&self) -> LoadedCatalog {
        let text = match self.store.get(CATALOG_KEY) {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => {
                log::debug!("No stored catalog, using sample entries");
                return LoadedCatalog::seeded(SeedReason::Missing);
            }
            Err(e) => {
                swallow(StoreOp::LoadCatalog, &e);
                return LoadedCatalog::seeded(SeedReason::Corrupt);
            }
        };

        match decode_catalog(&text) {
            Some((entries, dropped)) => {
                log::debug!(
                    "Loaded {} stored entries ({} skipped)",
                    entries.len(),
                    dropped
                );
                LoadedCatalog {
                    entries,
                    origin: CatalogOrigin::Stored,
                    dropped,
                }
            }
            None => {
                log::warn!(
                    "Stored catalog under '{}' is not a readable document; using sample entries",
                    CATALOG_KEY
                );
                LoadedCatalog::seeded(SeedReason::Corrupt)
            }
        }
    }

    /// Persist the full catalog as a JSON array. Failures are logged only.
    pub fn save_catalog(&mut self, entries: &[MediaEntry]) {
        let encoded = match serde_json::to_string(entries) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("{:?} failed to encode catalog: {}", StoreOp::SaveCatalog, e);
                return;
            }
        };
        match self.store.set(CATALOG_KEY, &encoded) {
            Ok(()) => log::debug!("Saved {} entries", entries.len()),
            Err(e) => swallow(StoreOp::SaveCatalog, &e),
        }
    }

    /// Load the kind filter; `All` if missing, unreadable, or unrecognised.
    pub fn load_filter_state(&self) -> KindFilter {
        match self.store.get(FILTER_KEY) {
            Ok(Some(text)) => KindFilter::from_stored(&text),
            Ok(None) => KindFilter::All,
            Err(e) => {
                swallow(StoreOp::LoadFilter, &e);
                KindFilter::All
            }
        }
    }

    pub fn save_filter_state(&mut self, filter: KindFilter) {
        if let Err(e) = self.store.set(FILTER_KEY, filter.as_str()) {
            swallow(StoreOp::SaveFilter, &e);
        }
    }

    /// Load the favorites-only flag: set only if the stored text is exactly `true`.
    pub fn load_favorites_only(&self) -> bool {
        match self.store.get(FAVORITES_KEY) {
            Ok(text) => text.as_deref() == Some("true"),
            Err(e) => {
                swallow(StoreOp::LoadFavorites, &e);
                false
            }
        }
    }

    pub fn save_favorites_only(&mut self, favorites_only: bool) {
        let text = if favorites_only { "true" } else { "false" };
        if let Err(e) = self.store.set(FAVORITES_KEY, text) {
            swallow(StoreOp::SaveFavorites, &e);
        }
    }

    /// Remove every owned key. Unlike the other operations, failure is
    /// returned so the caller can tell the user.
    ///
    /// All keys are attempted even if one fails; the first error is returned.
    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        debug_assert_eq!(StoreOp::ClearAll.failure_policy(), FailurePolicy::Report);
        let mut first_error = None;
        for key in OWNED_KEYS {
            if let Err(e) = self.store.remove(key) {
                log::error!("Failed to remove '{}': {}", key, e);
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
