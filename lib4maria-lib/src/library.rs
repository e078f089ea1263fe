//! The catalog as the view sees it.
//!
//! [`Library`] owns the in-memory catalog, the filter state, and the current
//! random pick, and writes every change through to the store. Its methods are
//! the user intents of the front end; none of them panic, and failures come
//! back as [`LibraryError`] values with a message ready to display.

use std::path::Path;

use lib4maria_catalog::{
    Catalog, Clock, EntryId, FilterState, KindFilter, MediaDraft, MediaEntry, SystemClock,
    ViewCounts,
};
use lib4maria_import::{
    ImportMode, ImportOutcome, ImportSession, ImportStats, export_document, parse_document,
    write_export,
};
use lib4maria_store::{CatalogOrigin, KeyValueStore, LibraryStore};
use rand::Rng;

use crate::error::LibraryError;

pub struct Library<S: KeyValueStore> {
    store: LibraryStore<S>,
    catalog: Catalog,
    filter: FilterState,
    random_pick: Option<EntryId>,
    origin: CatalogOrigin,
    imports: ImportSession,
    clock: Box<dyn Clock>,
}

impl<S: KeyValueStore> Library<S> {
    /// Load catalog and filter state from `store`, using the system clock for ids.
    pub fn open(store: S) -> Self {
        Self::open_with_clock(store, Box::new(SystemClock))
    }

    pub fn open_with_clock(store: S, clock: Box<dyn Clock>) -> Self {
        let store = LibraryStore::new(store);
        let loaded = store.load_catalog();
        match loaded.origin {
            CatalogOrigin::Stored if loaded.dropped > 0 => log::warn!(
                "Loaded {} entries; {} unreadable entries were skipped",
                loaded.entries.len(),
                loaded.dropped
            ),
            CatalogOrigin::Stored => log::debug!("Loaded {} entries", loaded.entries.len()),
            CatalogOrigin::Seeded(reason) => {
                log::debug!("Starting from sample entries ({:?})", reason)
            }
        }
        let filter = FilterState {
            kind: store.load_filter_state(),
            favorites_only: store.load_favorites_only(),
            search: String::new(),
        };
        Self {
            store,
            catalog: Catalog::new(loaded.entries),
            filter,
            random_pick: None,
            origin: loaded.origin,
            imports: ImportSession::new(),
            clock,
        }
    }

    /// Whether the catalog came from storage or is the sample collection.
    pub fn origin(&self) -> CatalogOrigin {
        self.origin
    }

    pub fn entries(&self) -> &[MediaEntry] {
        self.catalog.entries()
    }

    pub fn get(&self, id: EntryId) -> Option<&MediaEntry> {
        self.catalog.get(id)
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn store(&self) -> &LibraryStore<S> {
        &self.store
    }

    /// Entries passing the current filter, in catalog order.
    pub fn visible(&self) -> Vec<&MediaEntry> {
        self.catalog.filter(&self.filter)
    }

    pub fn counts(&self) -> ViewCounts {
        self.catalog.counts(&self.filter)
    }

    /// Handle to the single-flight import guard, for callers that read import
    /// files outside this `Library` (another task, a file picker).
    pub fn import_session(&self) -> ImportSession {
        self.imports.clone()
    }

    fn persist(&mut self) {
        self.store.save_catalog(self.catalog.entries());
    }

    // ── Catalog intents ─────────────────────────────────────────────────────

    /// Submit the creation form. Returns the new entry's id.
    pub fn add(&mut self, draft: MediaDraft) -> Result<EntryId, LibraryError> {
        let id = self.catalog.add(draft, self.clock.as_ref())?;
        self.persist();
        log::debug!("Added entry {}", id);
        Ok(id)
    }

    /// Delete one entry. Returns `false` if no entry had that id.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let removed = self.catalog.remove(id);
        if removed {
            self.persist();
            if self.random_pick == Some(id) {
                self.random_pick = None;
            }
        }
        removed
    }

    /// Flip an entry's favorite flag. Returns the new value, or `None` for an
    /// unknown id.
    pub fn toggle_favorite(&mut self, id: EntryId) -> Option<bool> {
        let now = self.catalog.toggle_favorite(id)?;
        self.persist();
        Some(now)
    }

    // ── Filter intents ──────────────────────────────────────────────────────

    /// Change the kind filter. Switching to `All` also dismisses the random pick.
    pub fn set_kind_filter(&mut self, kind: KindFilter) {
        self.filter.kind = kind;
        self.store.save_filter_state(kind);
        if kind == KindFilter::All {
            self.random_pick = None;
        }
    }

    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        self.filter.favorites_only = favorites_only;
        self.store.save_favorites_only(favorites_only);
    }

    /// Returns the new value.
    pub fn toggle_favorites_only(&mut self) -> bool {
        let next = !self.filter.favorites_only;
        self.set_favorites_only(next);
        next
    }

    /// Session-only; not persisted.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search = term.into();
    }

    // ── Random pick ─────────────────────────────────────────────────────────

    /// Pick a random entry from the current view and remember it. An empty
    /// view leaves the previous pick in place and returns `None`.
    pub fn pick_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&MediaEntry> {
        let id = self.catalog.pick_random(&self.filter, rng)?.id;
        self.random_pick = Some(id);
        self.catalog.get(id)
    }

    /// The remembered pick, with its current favorite state.
    pub fn random_pick(&self) -> Option<&MediaEntry> {
        self.random_pick.and_then(|id| self.catalog.get(id))
    }

    pub fn dismiss_random_pick(&mut self) {
        self.random_pick = None;
    }

    // ── Import / export ─────────────────────────────────────────────────────

    /// The backup document for the whole catalog.
    pub fn export_document(&self) -> Result<String, LibraryError> {
        Ok(export_document(self.catalog.entries())?)
    }

    pub fn export_to(&self, path: &Path) -> Result<(), LibraryError> {
        write_export(path, self.catalog.entries())?;
        log::debug!("Exported {} entries", self.catalog.len());
        Ok(())
    }

    /// Import a document already in memory.
    pub fn import_text(
        &mut self,
        raw: &str,
        mode: ImportMode,
    ) -> Result<ImportOutcome, LibraryError> {
        let parsed = parse_document(raw, self.clock.as_ref())?;
        Ok(self.apply_import(parsed.entries, mode))
    }

    /// Read, validate, and apply an import file. `choose` sees the validation
    /// counts and decides between merging and replacing.
    ///
    /// `&mut self` already keeps two imports on one `Library` apart. The
    /// session guard rejects this import while another holder of
    /// [`Library::import_session`] has a ticket out.
    pub async fn import_file(
        &mut self,
        path: &Path,
        choose: impl FnOnce(&ImportStats) -> ImportMode,
    ) -> Result<ImportOutcome, LibraryError> {
        let parsed = self
            .imports
            .import_file(path, self.clock.as_ref())
            .await?;
        let mode = choose(&parsed.stats);
        Ok(self.apply_import(parsed.entries, mode))
    }

    /// Merge or replace with entries that already passed validation.
    pub fn apply_import(&mut self, imported: Vec<MediaEntry>, mode: ImportMode) -> ImportOutcome {
        let count = imported.len();
        let next = lib4maria_import::apply(self.catalog.entries(), imported, mode);
        self.catalog.replace(next);
        self.persist();
        if self.random_pick.is_some_and(|id| self.catalog.get(id).is_none()) {
            self.random_pick = None;
        }
        let outcome = ImportOutcome {
            mode,
            imported: count,
            total: self.catalog.len(),
        };
        log::debug!("{}", outcome.message());
        outcome
    }

    /// Erase all persisted state and empty the catalog.
    ///
    /// If the store refuses any removal, the in-memory state is kept and
    /// written back over whatever keys the partial clear did remove, then the
    /// error is returned.
    pub fn clear(&mut self) -> Result<(), LibraryError> {
        if let Err(e) = self.store.clear_all() {
            self.persist();
            self.store.save_filter_state(self.filter.kind);
            self.store.save_favorites_only(self.filter.favorites_only);
            return Err(LibraryError::Clear(e));
        }
        self.catalog.replace(Vec::new());
        self.filter.kind = KindFilter::All;
        self.filter.favorites_only = false;
        self.random_pick = None;
        self.persist();
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/library_tests.rs"]
mod tests;
