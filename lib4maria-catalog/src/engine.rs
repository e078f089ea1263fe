//! Pure operations over a collection of entries.
//!
//! Every function takes the current collection and returns the next one;
//! nothing is mutated in place. [`Catalog`](crate::Catalog) wraps these for
//! callers that want a single owned state value.

use std::collections::HashSet;

use rand::Rng;

use crate::types::{EntryId, KindFilter, MediaDraft, MediaEntry, MediaKind};

/// Append `draft` as a new, non-favorite entry with the given id.
pub fn add(entries: &[MediaEntry], draft: MediaDraft, id: EntryId) -> Vec<MediaEntry> {
    let mut next = entries.to_vec();
    next.push(draft.into_entry(id));
    next
}

/// Drop the entry with `id`. An unknown id leaves the collection unchanged.
pub fn remove(entries: &[MediaEntry], id: EntryId) -> Vec<MediaEntry> {
    entries.iter().filter(|e| e.id != id).cloned().collect()
}

/// Flip `is_favorite` on the entry with `id`. An unknown id is a no-op.
pub fn toggle_favorite(entries: &[MediaEntry], id: EntryId) -> Vec<MediaEntry> {
    entries
        .iter()
        .map(|e| {
            if e.id == id {
                MediaEntry {
                    is_favorite: !e.is_favorite,
                    ..e.clone()
                }
            } else {
                e.clone()
            }
        })
        .collect()
}

/// The visible subsequence: kind matches, favorite if `favorites_only`, and
/// title or a theme contains `search` (case-insensitive; empty matches all).
pub fn filter<'a>(
    entries: &'a [MediaEntry],
    kind: KindFilter,
    favorites_only: bool,
    search: &str,
) -> Vec<&'a MediaEntry> {
    let needle = search.to_lowercase();
    entries
        .iter()
        .filter(|e| kind.matches(e.kind))
        .filter(|e| !favorites_only || e.is_favorite)
        .filter(|e| e.matches_search(&needle))
        .collect()
}

/// Uniformly choose one entry of `view`, or `None` if it is empty.
pub fn pick_random<'a, R: Rng + ?Sized>(
    view: &[&'a MediaEntry],
    rng: &mut R,
) -> Option<&'a MediaEntry> {
    if view.is_empty() {
        return None;
    }
    let index = rng.random_range(0..view.len());
    Some(view[index])
}

/// Id for a new entry: the current time, bumped past the highest id in use so
/// two entries created in the same millisecond never share one. If the highest
/// id is already `EntryId::MAX`, the smallest unused positive id is taken.
pub fn next_id(entries: &[MediaEntry], now_millis: i64) -> EntryId {
    match entries.iter().map(|e| e.id).max() {
        Some(highest) if highest >= now_millis => highest
            .checked_add(1)
            .unwrap_or_else(|| lowest_free_id(&entries.iter().map(|e| e.id).collect())),
        _ => now_millis,
    }
}

/// Smallest positive id not in `taken`.
pub fn lowest_free_id(taken: &HashSet<EntryId>) -> EntryId {
    // One of 1..=len+1 is always free.
    let limit = taken.len() as EntryId + 1;
    (1..=limit).find(|id| !taken.contains(id)).unwrap_or(limit)
}

/// Counts shown next to the filter buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewCounts {
    /// Entries in the current view.
    pub visible: usize,
    /// Movies in the current view.
    pub movies: usize,
    /// Series in the current view.
    pub series: usize,
    /// Favorites across the whole catalog, regardless of filters.
    pub favorites: usize,
}

pub fn view_counts(entries: &[MediaEntry], view: &[&MediaEntry]) -> ViewCounts {
    ViewCounts {
        visible: view.len(),
        movies: view.iter().filter(|e| e.kind == MediaKind::Movie).count(),
        series: view.iter().filter(|e| e.kind == MediaKind::Series).count(),
        favorites: entries.iter().filter(|e| e.is_favorite).count(),
    }
}
