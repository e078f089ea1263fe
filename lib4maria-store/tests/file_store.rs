use std::fs;

use lib4maria_catalog::seed_entries;
use lib4maria_store::*;
use tempfile::TempDir;

#[test]
fn open_creates_missing_directory() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("nested").join("data");
    let store = FileStore::open(&dir).unwrap();
    assert!(dir.is_dir());
    assert_eq!(store.dir(), dir.as_path());
}

#[test]
fn get_missing_key_is_none() {
    let tmp = TempDir::new().unwrap();
    let store = FileStore::open(tmp.path()).unwrap();
    assert_eq!(store.get(CATALOG_KEY).unwrap(), None);
}

#[test]
fn set_get_remove() {
    let tmp = TempDir::new().unwrap();
    let mut store = FileStore::open(tmp.path()).unwrap();
    store.set(FILTER_KEY, "movie").unwrap();
    assert_eq!(store.get(FILTER_KEY).unwrap().as_deref(), Some("movie"));
    assert_eq!(
        fs::read_to_string(tmp.path().join(FILTER_KEY)).unwrap(),
        "movie"
    );
    assert!(!tmp.path().join("lib4maria-filter.tmp").exists());

    store.remove(FILTER_KEY).unwrap();
    assert_eq!(store.get(FILTER_KEY).unwrap(), None);
    store.remove(FILTER_KEY).unwrap();
}

#[test]
fn quota_rejects_large_values() {
    let tmp = TempDir::new().unwrap();
    let mut store = FileStore::open(tmp.path()).unwrap().with_quota(4);
    store.set(FAVORITES_KEY, "true").unwrap();
    let err = store.set(FAVORITES_KEY, "false").unwrap_err();
    assert!(matches!(err, StoreError::QuotaExceeded { size: 5, limit: 4, .. }));
    assert_eq!(store.get(FAVORITES_KEY).unwrap().as_deref(), Some("true"));
}

#[test]
fn path_like_keys_are_rejected() {
    let tmp = TempDir::new().unwrap();
    let mut store = FileStore::open(tmp.path()).unwrap();
    assert!(store.set("../escape", "x").is_err());
    assert!(store.get(".hidden").is_err());
}

#[test]
fn catalog_survives_reopen() {
    let tmp = TempDir::new().unwrap();
    {
        let mut store = open_store(tmp.path()).unwrap();
        store.save_catalog(&seed_entries()[..1]);
    }
    let store = open_store(tmp.path()).unwrap();
    let loaded = store.load_catalog();
    assert_eq!(loaded.origin, CatalogOrigin::Stored);
    assert_eq!(loaded.entries.len(), 1);
    assert_eq!(loaded.entries[0].title, "Inception");
}

#[test]
fn over_quota_catalog_save_keeps_previous_value() {
    let tmp = TempDir::new().unwrap();
    let mut store = LibraryStore::new(FileStore::open(tmp.path()).unwrap().with_quota(2));
    store.save_catalog(&[]);
    store.save_catalog(&seed_entries());
    let loaded = store.load_catalog();
    assert_eq!(loaded.origin, CatalogOrigin::Stored);
    assert!(loaded.entries.is_empty());
}
