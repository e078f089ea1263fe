//! Durable storage for the media catalog.
//!
//! A [`KeyValueStore`] is the storage medium (memory or a directory of files);
//! [`LibraryStore`] maps catalog state onto it with a fixed set of keys and an
//! explicit failure policy per operation.

pub mod adapter;
pub mod file_store;
pub mod kv;

pub use adapter::{
    CATALOG_KEY, CatalogOrigin, FAVORITES_KEY, FILTER_KEY, FailurePolicy, LibraryStore,
    LoadedCatalog, OWNED_KEYS, SeedReason, StoreOp, decode_catalog,
};
pub use file_store::FileStore;
pub use kv::{KeyValueStore, MemoryStore, StoreError};

/// Open a file-backed catalog store in `dir`.
pub fn open_store(dir: &std::path::Path) -> Result<LibraryStore<FileStore>, StoreError> {
    Ok(LibraryStore::new(FileStore::open(dir)?))
}

/// Open an empty in-memory catalog store. Useful for testing.
pub fn open_memory() -> LibraryStore<MemoryStore> {
    LibraryStore::new(MemoryStore::new())
}
