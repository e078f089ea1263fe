//! The authoritative in-memory collection.

use rand::Rng;

use crate::clock::Clock;
use crate::engine::{self, ViewCounts};
use crate::types::{DraftError, EntryId, FilterState, MediaDraft, MediaEntry};

/// Owned catalog state. Each mutation computes the next collection with the
/// functions in [`engine`] and swaps it in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<MediaEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<MediaEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MediaEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<MediaEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&MediaEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Submit a draft. Returns the id assigned to the new entry.
    pub fn add(&mut self, draft: MediaDraft, clock: &dyn Clock) -> Result<EntryId, DraftError> {
        draft.check()?;
        let id = engine::next_id(&self.entries, clock.now_millis());
        self.entries = engine::add(&self.entries, draft, id);
        Ok(id)
    }

    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let next = engine::remove(&self.entries, id);
        let removed = next.len() != self.entries.len();
        self.entries = next;
        removed
    }

    /// Returns the entry's new favorite state, or `None` for an unknown id.
    pub fn toggle_favorite(&mut self, id: EntryId) -> Option<bool> {
        self.get(id)?;
        self.entries = engine::toggle_favorite(&self.entries, id);
        self.get(id).map(|e| e.is_favorite)
    }

    /// Swap in a whole new collection (import, clear).
    pub fn replace(&mut self, entries: Vec<MediaEntry>) {
        self.entries = entries;
    }

    pub fn filter(&self, state: &FilterState) -> Vec<&MediaEntry> {
        engine::filter(
            &self.entries,
            state.kind,
            state.favorites_only,
            &state.search,
        )
    }

    pub fn counts(&self, state: &FilterState) -> ViewCounts {
        engine::view_counts(&self.entries, &self.filter(state))
    }

    pub fn pick_random<R: Rng + ?Sized>(
        &self,
        state: &FilterState,
        rng: &mut R,
    ) -> Option<&MediaEntry> {
        engine::pick_random(&self.filter(state), rng)
    }
}
