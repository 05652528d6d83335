//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`.

use ingredient_lists_core::{KeyValueStore, PersistenceError};
use wasm_bindgen::JsValue;

/// Stateless handle; the storage object is looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage, PersistenceError> {
        let window =
            web_sys::window().ok_or_else(|| PersistenceError::Storage("no window".into()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| PersistenceError::Storage("localStorage unavailable".into()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        // Quota errors surface here
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> PersistenceError {
    PersistenceError::Storage(format!("{:?}", err))
}
