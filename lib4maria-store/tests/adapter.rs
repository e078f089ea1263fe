use lib4maria_catalog::{KindFilter, MediaKind, seed_entries};
use lib4maria_store::*;

/// A store whose reads, writes, or removes can be made to fail.
#[derive(Default)]
struct FlakyStore {
    inner: MemoryStore,
    fail_get: bool,
    fail_set: bool,
    fail_remove: bool,
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_get {
            return Err(StoreError::unavailable("read refused"));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_set {
            return Err(StoreError::QuotaExceeded {
                key: key.to_string(),
                size: value.len(),
                limit: 0,
            });
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.fail_remove {
            return Err(StoreError::unavailable("remove refused"));
        }
        self.inner.remove(key)
    }
}

#[test]
fn missing_catalog_loads_seed_as_first_run() {
    let store = open_memory();
    let loaded = store.load_catalog();
    assert_eq!(loaded.origin, CatalogOrigin::Seeded(SeedReason::Missing));
    assert_eq!(loaded.entries, seed_entries());
}

#[test]
fn not_json_loads_seed_as_corrupt() {
    let store = LibraryStore::new(MemoryStore::new().with_value(CATALOG_KEY, "not json"));
    let loaded = store.load_catalog();
    assert_eq!(loaded.origin, CatalogOrigin::Seeded(SeedReason::Corrupt));
    assert_eq!(loaded.entries, seed_entries());
}

#[test]
fn wrong_shape_loads_seed_as_corrupt() {
    for text in ["null", "42", r#"{"items": []}"#, r#"{"mediaItems": 3}"#] {
        let store = LibraryStore::new(MemoryStore::new().with_value(CATALOG_KEY, text));
        assert_eq!(
            store.load_catalog().origin,
            CatalogOrigin::Seeded(SeedReason::Corrupt),
            "{text}"
        );
    }
}

#[test]
fn read_error_loads_seed_as_corrupt() {
    let store = LibraryStore::new(FlakyStore {
        fail_get: true,
        ..Default::default()
    });
    let loaded = store.load_catalog();
    assert_eq!(loaded.origin, CatalogOrigin::Seeded(SeedReason::Corrupt));
    assert_eq!(store.load_filter_state(), KindFilter::All);
    assert!(!store.load_favorites_only());
}

#[test]
fn empty_array_is_a_stored_empty_catalog() {
    let store = LibraryStore::new(MemoryStore::new().with_value(CATALOG_KEY, "[]"));
    let loaded = store.load_catalog();
    assert_eq!(loaded.origin, CatalogOrigin::Stored);
    assert!(loaded.entries.is_empty());
}

#[test]
fn save_then_load_round_trips() {
    let mut store = open_memory();
    let mut entries = seed_entries();
    entries[0].is_favorite = true;
    store.save_catalog(&entries);

    let loaded = store.load_catalog();
    assert_eq!(loaded.origin, CatalogOrigin::Stored);
    assert_eq!(loaded.entries, entries);
}

#[test]
fn catalog_is_saved_as_bare_array() {
    let mut store = open_memory();
    store.save_catalog(&seed_entries());
    let raw = store.inner().get(CATALOG_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value.is_array());
    assert_eq!(value[1]["type"], "series");
}

#[test]
fn wrapped_document_is_accepted_on_load() {
    let text = r#"{"mediaItems":[{"id":5,"title":"Heat","type":"movie","themes":["Crime"],
        "releaseYear":"1995","rating":"8","description":"","isFavorite":true}]}"#;
    let store = LibraryStore::new(MemoryStore::new().with_value(CATALOG_KEY, text));
    let loaded = store.load_catalog();
    assert_eq!(loaded.origin, CatalogOrigin::Stored);
    assert_eq!(loaded.entries.len(), 1);
    assert_eq!(loaded.entries[0].kind, MediaKind::Movie);
    assert!(loaded.entries[0].is_favorite);
}

#[test]
fn undecodable_entries_are_skipped_not_fatal() {
    let text = r#"[
        {"id":1,"title":"Keep","type":"movie"},
        {"id":2,"title":"Bad kind","type":"podcast"},
        {"title":"No id","type":"series"}
    ]"#;
    let store = LibraryStore::new(MemoryStore::new().with_value(CATALOG_KEY, text));
    let loaded = store.load_catalog();
    assert_eq!(loaded.origin, CatalogOrigin::Stored);
    assert_eq!(loaded.dropped, 2);
    assert_eq!(loaded.entries.len(), 1);
    assert_eq!(loaded.entries[0].title, "Keep");
}

#[test]
fn filter_and_favorites_round_trip_with_defaults() {
    let mut store = open_memory();
    assert_eq!(store.load_filter_state(), KindFilter::All);
    assert!(!store.load_favorites_only());

    store.save_filter_state(KindFilter::SERIES);
    store.save_favorites_only(true);
    assert_eq!(store.load_filter_state(), KindFilter::SERIES);
    assert!(store.load_favorites_only());
    assert_eq!(store.inner().get(FILTER_KEY).unwrap().as_deref(), Some("series"));
    assert_eq!(store.inner().get(FAVORITES_KEY).unwrap().as_deref(), Some("true"));
}

#[test]
fn stored_filter_outside_written_forms_loads_as_all() {
    for text in ["tv", "Movie", "films"] {
        let store = LibraryStore::new(MemoryStore::new().with_value(FILTER_KEY, text));
        assert_eq!(store.load_filter_state(), KindFilter::All, "{text}");
    }
}

#[test]
fn favorites_flag_requires_exact_true() {
    let store = LibraryStore::new(MemoryStore::new().with_value(FAVORITES_KEY, "TRUE"));
    assert!(!store.load_favorites_only());
}

#[test]
fn write_failures_are_swallowed() {
    let mut store = LibraryStore::new(FlakyStore {
        fail_set: true,
        ..Default::default()
    });
    store.save_catalog(&seed_entries());
    store.save_filter_state(KindFilter::MOVIE);
    store.save_favorites_only(true);
    assert!(store.inner().inner.is_empty());
}

#[test]
fn clear_all_removes_only_owned_keys() {
    let mut store = LibraryStore::new(MemoryStore::new().with_value("other-app", "keep me"));
    store.save_catalog(&seed_entries());
    store.save_filter_state(KindFilter::MOVIE);
    store.save_favorites_only(true);

    store.clear_all().unwrap();
    for key in OWNED_KEYS {
        assert_eq!(store.inner().get(key).unwrap(), None);
    }
    assert_eq!(store.inner().get("other-app").unwrap().as_deref(), Some("keep me"));
}

#[test]
fn clear_failure_is_reported() {
    let mut store = LibraryStore::new(FlakyStore {
        fail_remove: true,
        ..Default::default()
    });
    assert!(store.clear_all().is_err());
}

#[test]
fn policy_table_is_asymmetric() {
    for op in [
        StoreOp::LoadCatalog,
        StoreOp::SaveCatalog,
        StoreOp::LoadFilter,
        StoreOp::SaveFilter,
        StoreOp::LoadFavorites,
        StoreOp::SaveFavorites,
    ] {
        assert_eq!(op.failure_policy(), FailurePolicy::Swallow, "{op:?}");
    }
    assert_eq!(StoreOp::ClearAll.failure_policy(), FailurePolicy::Report);
}
