use std::collections::HashSet;

use lib4maria_catalog::{FixedClock, MediaEntry, seed_entries};
use lib4maria_import::*;

fn imported_at(now: i64) -> Vec<MediaEntry> {
    let raw = r#"{"mediaItems":[
        {"title":"One","type":"movie","themes":["Action"],"releaseYear":"2001","rating":"6","description":"","isFavorite":false},
        {"title":"Two","type":"series","themes":["Comedy"],"releaseYear":"2002","rating":"7","description":"","isFavorite":true}
    ]}"#;
    parse_import(raw, &FixedClock::new(now)).unwrap()
}

#[test]
fn merge_appends_after_existing() {
    let existing = seed_entries();
    let merged = merge_additive(&existing, imported_at(1_000));
    let titles: Vec<&str> = merged.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Inception", "Breaking Bad", "One", "Two"]);
    assert_eq!(merged[2].id, 1_000);
    assert_eq!(merged[3].id, 1_001);
}

#[test]
fn replace_discards_existing() {
    let existing = seed_entries();
    let replaced = apply(&existing, imported_at(1_000), ImportMode::Replace);
    assert_eq!(replaced.len(), 2);
    assert!(replaced.iter().all(|e| e.id >= 1_000));
}

#[test]
fn colliding_import_ids_are_moved_above_existing() {
    // Clock reads 2, the id of an existing seed entry.
    let existing = seed_entries();
    let merged = merge_additive(&existing, imported_at(2));
    let ids: Vec<i64> = merged.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    let unique: HashSet<i64> = ids.iter().copied().collect();
    assert_eq!(unique.len(), merged.len());
}

#[test]
fn merge_next_to_id_ceiling_renumbers_into_free_slots() {
    let mut existing = seed_entries();
    existing[1].id = i64::MAX;
    let merged = merge_additive(&existing, imported_at(1));
    let ids: Vec<i64> = merged.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, i64::MAX, 2, 3]);
}

#[test]
fn repeated_merges_at_the_same_instant_stay_unique() {
    let mut catalog = seed_entries();
    for _ in 0..3 {
        catalog = merge_additive(&catalog, imported_at(5_000));
    }
    let unique: HashSet<i64> = catalog.iter().map(|e| e.id).collect();
    assert_eq!(unique.len(), catalog.len());
    assert_eq!(catalog.len(), 8);
}

#[test]
fn confirmation_answer_selects_mode() {
    assert_eq!(ImportMode::from_confirmation(true), ImportMode::Merge);
    assert_eq!(ImportMode::from_confirmation(false), ImportMode::Replace);
    assert_eq!("replace".parse::<ImportMode>().unwrap(), ImportMode::Replace);
    assert!("maybe".parse::<ImportMode>().is_err());
}

#[test]
fn outcome_messages() {
    let merged = ImportOutcome {
        mode: ImportMode::Merge,
        imported: 3,
        total: 5,
    };
    assert_eq!(merged.message(), "Successfully added 3 items to your library");
    let replaced = ImportOutcome {
        mode: ImportMode::Replace,
        imported: 3,
        total: 3,
    };
    assert_eq!(replaced.message(), "Successfully replaced library with 3 items");
}
