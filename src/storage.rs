//! Browser Storage Adapter
//!
//! `KeyValueStore` over `window.localStorage`. The handle is looked up on
//! every call, so the adapter itself is a zero-sized `Send + Sync` value.

use menu_core::repository::KeyValueStore;
use menu_core::store::{CartStore, FavoritesStore, PreferenceStore};
use menu_core::{MenuError, MenuResult};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

pub type BrowserCart = CartStore<BrowserStorage>;
pub type BrowserFavorites = FavoritesStore<BrowserStorage>;
pub type BrowserPreferences = PreferenceStore<BrowserStorage>;

fn js_error(err: JsValue) -> MenuError {
    MenuError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

fn local_storage() -> MenuResult<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| MenuError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| MenuError::Storage("localStorage is disabled".to_string()))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> MenuResult<Option<String>> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> MenuResult<()> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> MenuResult<()> {
        local_storage()?.remove_item(key).map_err(js_error)
    }
}
