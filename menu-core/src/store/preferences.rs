//! Preference Store
//!
//! Currently just the dark-mode flag.

use crate::repository::{load_value, save_value, KeyValueStore, DARK_MODE_KEY};

#[derive(Debug, Clone)]
pub struct PreferenceStore<S: KeyValueStore> {
    storage: S,
    dark_mode: bool,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn load(storage: S) -> Self {
        let dark_mode = load_value(&storage, DARK_MODE_KEY).unwrap_or(false);
        Self { storage, dark_mode }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn set_dark_mode(&mut self, enabled: bool) {
        self.dark_mode = enabled;
        if let Err(e) = save_value(&self.storage, DARK_MODE_KEY, &enabled) {
            log::error!("failed to persist dark mode: {}", e);
        }
    }

    /// Flip the flag and return the new value
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.set_dark_mode(!self.dark_mode);
        self.dark_mode
    }
}
