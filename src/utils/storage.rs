//! localStorage adapter for [`KeyValueStore`].

use crate::core::error::StorageError;
use crate::core::wishlist::KeyValueStore;

use super::dom;

/// Browser localStorage. Reads fail soft; writes report why they failed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = dom::local_storage()?;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed)
    }
}
