//! Favorites Store
//!
//! Keeps full item snapshots so the drawer renders without refetching.

use crate::domain::{Entity, MenuItem};
use crate::repository::{load_collection, save_collection, KeyValueStore, FAVORITES_KEY};

#[derive(Debug, Clone)]
pub struct FavoritesStore<S: KeyValueStore> {
    storage: S,
    items: Vec<MenuItem>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Load persisted favorites; malformed data yields an empty set
    pub fn load(storage: S) -> Self {
        let mut items: Vec<MenuItem> = load_collection(&storage, FAVORITES_KEY);
        // Older data may carry duplicates, keep the first snapshot
        let mut seen = std::collections::HashSet::new();
        items.retain(|item| seen.insert(item.id()));
        Self { storage, items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_favorite(&self, item_id: &str) -> bool {
        self.items.iter().any(|item| item.id == item_id)
    }

    /// Add the item if absent, remove it otherwise; returns the new membership
    pub fn toggle(&mut self, item: &MenuItem) -> bool {
        let now_favorite = if self.is_favorite(&item.id) {
            self.items.retain(|fav| fav.id() != item.id());
            false
        } else {
            self.items.push(item.clone());
            true
        };
        self.persist();
        now_favorite
    }

    pub fn remove(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        let removed = self.items.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    fn persist(&self) {
        if let Err(e) = save_collection(&self.storage, FAVORITES_KEY, &self.items) {
            log::error!("failed to persist favorites: {}", e);
        }
    }
}
