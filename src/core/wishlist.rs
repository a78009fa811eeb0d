//! Add-only wishlist persisted as a JSON array of product handles.
//!
//! Every [`Wishlist::add`] re-reads the stored list, so two tabs writing at
//! the same time can lose one addition (last write wins on the whole list).

use std::cell::RefCell;
use std::collections::HashMap;

use crate::core::error::StorageError;

/// Minimal string key/value storage (localStorage in the browser).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory [`KeyValueStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Outcome of adding a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Handle appended and persisted.
    Added,
    /// Handle was already present; nothing written.
    AlreadyPresent,
}

/// Wishlist bound to one storage slot.
#[derive(Debug)]
pub struct Wishlist<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Wishlist<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored handles in insertion order.
    ///
    /// Missing or malformed data reads as an empty list.
    pub fn handles(&self) -> Vec<String> {
        self.store
            .get(&self.key)
            .and_then(|json| serde_json::from_str::<Option<Vec<String>>>(&json).ok())
            .flatten()
            .unwrap_or_default()
    }

    pub fn contains(&self, handle: &str) -> bool {
        self.handles().iter().any(|h| h == handle)
    }

    /// Append `handle` unless already present.
    pub fn add(&self, handle: &str) -> Result<AddOutcome, StorageError> {
        let mut handles = self.handles();
        if handles.iter().any(|h| h == handle) {
            return Ok(AddOutcome::AlreadyPresent);
        }

        handles.push(handle.to_string());
        let json =
            serde_json::to_string(&handles).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.store.set(&self.key, &json)?;
        Ok(AddOutcome::Added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "wishlist";

    fn stored(wishlist: &Wishlist<MemoryStore>) -> Option<String> {
        wishlist.store.get(KEY)
    }

    #[test]
    fn test_empty_by_default() {
        let wishlist = Wishlist::new(MemoryStore::new(), KEY);
        assert!(wishlist.handles().is_empty());
        assert!(!wishlist.contains("linen-shirt"));
    }

    #[test]
    fn test_same_handle_twice() {
        let wishlist = Wishlist::new(MemoryStore::new(), KEY);

        assert_eq!(wishlist.add("linen-shirt"), Ok(AddOutcome::Added));
        assert_eq!(wishlist.add("linen-shirt"), Ok(AddOutcome::AlreadyPresent));

        assert_eq!(wishlist.handles(), vec!["linen-shirt"]);
        assert_eq!(stored(&wishlist).as_deref(), Some(r#"["linen-shirt"]"#));
    }

    #[test]
    fn test_distinct_handles_keep_insertion_order() {
        let wishlist = Wishlist::new(MemoryStore::new(), KEY);

        wishlist.add("wool-coat").unwrap();
        wishlist.add("linen-shirt").unwrap();

        assert_eq!(wishlist.handles(), vec!["wool-coat", "linen-shirt"]);
        assert!(wishlist.contains("wool-coat"));
    }

    #[test]
    fn test_invalid_json_reads_as_empty() {
        let store = MemoryStore::new();
        store.set(KEY, "{not json").unwrap();
        let wishlist = Wishlist::new(store, KEY);

        assert!(wishlist.handles().is_empty());
        wishlist.add("linen-shirt").unwrap();
        assert_eq!(wishlist.handles(), vec!["linen-shirt"]);
    }

    #[test]
    fn test_wrong_shape_reads_as_empty() {
        for raw in ["null", "42", r#"{"a":1}"#, "[1,2]", ""] {
            let store = MemoryStore::new();
            store.set(KEY, raw).unwrap();
            let wishlist = Wishlist::new(store, KEY);

            assert!(wishlist.handles().is_empty(), "input: {raw}");
            wishlist.add("tote").unwrap();
            assert_eq!(wishlist.handles(), vec!["tote"], "input: {raw}");
        }
    }

    #[test]
    fn test_reads_list_written_elsewhere() {
        let store = MemoryStore::new();
        store.set(KEY, r#"["a","b"]"#).unwrap();
        let wishlist = Wishlist::new(store, KEY);

        assert_eq!(wishlist.add("b"), Ok(AddOutcome::AlreadyPresent));
        assert_eq!(wishlist.add("c"), Ok(AddOutcome::Added));
        assert_eq!(wishlist.handles(), vec!["a", "b", "c"]);
    }

    struct FullStore;

    impl KeyValueStore for FullStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed)
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let wishlist = Wishlist::new(FullStore, KEY);
        assert_eq!(wishlist.add("tote"), Err(StorageError::WriteFailed));
    }
}
