//! Reconcile imported entries with the existing catalog.

use std::collections::HashSet;
use std::fmt;

use lib4maria_catalog::engine::lowest_free_id;
use lib4maria_catalog::{EntryId, MediaEntry};

/// How an import is applied. The choice is made outside the pipeline (a
/// confirmation prompt, a CLI flag, a setting).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Append imported entries after the existing ones.
    Merge,
    /// Discard the existing catalog.
    Replace,
}

impl ImportMode {
    /// Map the answer to "add to existing library?": yes merges, no replaces.
    pub fn from_confirmation(add_to_existing: bool) -> Self {
        if add_to_existing {
            Self::Merge
        } else {
            Self::Replace
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Replace => "replace",
        }
    }
}

impl fmt::Display for ImportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ImportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "merge" | "add" | "append" => Ok(Self::Merge),
            "replace" => Ok(Self::Replace),
            other => Err(format!("unknown import mode '{other}'")),
        }
    }
}

/// What an applied import did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOutcome {
    pub mode: ImportMode,
    pub imported: usize,
    /// Catalog size afterwards.
    pub total: usize,
}

impl ImportOutcome {
    pub fn message(&self) -> String {
        match self.mode {
            ImportMode::Merge => format!(
                "Successfully added {} items to your library",
                self.imported
            ),
            ImportMode::Replace => format!(
                "Successfully replaced library with {} items",
                self.imported
            ),
        }
    }
}

/// Existing entries followed by the imported ones.
///
/// Imported ids come from the clock at import time and can coincide with ids
/// already in the catalog. When they do, the whole imported batch is moved
/// above the highest existing id, keeping its internal spacing.
pub fn merge_additive(existing: &[MediaEntry], imported: Vec<MediaEntry>) -> Vec<MediaEntry> {
    let taken: HashSet<EntryId> = existing.iter().map(|e| e.id).collect();
    let imported = if imported.iter().any(|e| taken.contains(&e.id)) {
        rebase_ids(existing, imported)
    } else {
        imported
    };

    let mut merged = Vec::with_capacity(existing.len() + imported.len());
    merged.extend_from_slice(existing);
    merged.extend(imported);
    merged
}

/// The imported entries alone.
pub fn replace_all(imported: Vec<MediaEntry>) -> Vec<MediaEntry> {
    imported
}

/// Apply `imported` to `existing` according to `mode`.
pub fn apply(
    existing: &[MediaEntry],
    imported: Vec<MediaEntry>,
    mode: ImportMode,
) -> Vec<MediaEntry> {
    match mode {
        ImportMode::Merge => merge_additive(existing, imported),
        ImportMode::Replace => replace_all(imported),
    }
}

fn rebase_ids(existing: &[MediaEntry], mut imported: Vec<MediaEntry>) -> Vec<MediaEntry> {
    let (Some(lowest), Some(highest)) = (
        imported.iter().map(|e| e.id).min(),
        imported.iter().map(|e| e.id).max(),
    ) else {
        return imported;
    };
    let Some(highest_existing) = existing.iter().map(|e| e.id).max() else {
        return imported;
    };

    let shift = highest_existing
        .checked_add(1)
        .and_then(|start| start.checked_sub(lowest))
        .filter(|shift| highest.checked_add(*shift).is_some());

    match shift {
        Some(shift) => {
            log::warn!(
                "Imported ids collide with existing entries; shifting {} ids by {}",
                imported.len(),
                shift
            );
            for entry in &mut imported {
                entry.id += shift;
            }
        }
        None => {
            log::warn!(
                "Imported ids collide with existing entries and cannot be shifted; \
                 renumbering {} ids into free slots",
                imported.len()
            );
            let mut taken: HashSet<EntryId> = existing.iter().map(|e| e.id).collect();
            for entry in &mut imported {
                entry.id = lowest_free_id(&taken);
                taken.insert(entry.id);
            }
        }
    }
    imported
}
