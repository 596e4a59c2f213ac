//! `localStorage` backend for the session stores.

use gloo_storage::{LocalStorage, Storage};
use shared::StorageError;
use shared::storage::KeyValueStore;
use wasm_bindgen::JsValue;

/// Keeps session values in the browser's `localStorage`, as raw strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn platform(err: &JsValue) -> StorageError {
        StorageError::Platform(
            err.as_string()
                .unwrap_or_else(|| format!("localStorage failure: {err:?}")),
        )
    }
}

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|err| Self::platform(&err))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| Self::platform(&err))
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|err| Self::platform(&err))
    }
}
