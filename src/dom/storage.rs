//! `localStorage`-backed preference store.

use web_sys::Storage;

use super::describe;
use crate::prefs::{PreferenceStore, StoreError};

/// Origin-scoped persistent store. When storage is blocked (private
/// browsing, sandboxed frames) reads return nothing and writes fail with
/// `Unavailable`.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn from_window() -> Self {
        let storage = web_sys::window().and_then(|w| match w.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage blocked: {}", describe(&e));
                None
            }
        });
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("failed to read preference {key}: {}", describe(&e));
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::WriteFailed { key: key.to_owned(), reason: describe(&e) })
    }
}
