//! Menu Data Store
//!
//! Server-fetched menu data, held in a reactive_stores `Store` so each
//! section only re-renders when its own field changes.

use leptos::prelude::*;
use menu_core::domain::{Category, MenuItem, Restaurant};
use reactive_stores::Store;

/// Fetched menu data with per-section loading flags
#[derive(Clone, Debug, Default, Store)]
pub struct MenuState {
    /// Restaurant profile (None until loaded or on failure)
    pub restaurant: Option<Restaurant>,
    /// Categories, "View All" first
    pub categories: Vec<Category>,
    /// Items for the current category and search
    pub items: Vec<MenuItem>,
    pub restaurant_loading: bool,
    pub categories_loading: bool,
    pub items_loading: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            categories: vec![Category::all()],
            restaurant_loading: true,
            categories_loading: true,
            items_loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type MenuStore = Store<MenuState>;

/// Get the menu store from context
pub fn use_menu_store() -> MenuStore {
    expect_context::<MenuStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Restaurant profile, or defaults while it is missing
pub fn store_restaurant(store: &MenuStore) -> Restaurant {
    store.restaurant().get().unwrap_or_default()
}

/// Untracked variant for event handlers
pub fn store_restaurant_untracked(store: &MenuStore) -> Restaurant {
    store.restaurant().get_untracked().unwrap_or_default()
}

/// Finish the restaurant request; `None` keeps what was there
pub fn store_set_restaurant(store: &MenuStore, restaurant: Option<Restaurant>) {
    if let Some(restaurant) = restaurant {
        *store.restaurant().write() = Some(restaurant);
    }
    *store.restaurant_loading().write() = false;
}

/// Finish the categories request; `None` keeps what was there
pub fn store_set_categories(store: &MenuStore, categories: Option<Vec<Category>>) {
    if let Some(categories) = categories {
        *store.categories().write() = categories;
    }
    *store.categories_loading().write() = false;
}

/// Mark an items request as in flight
pub fn store_begin_items(store: &MenuStore) {
    *store.items_loading().write() = true;
}

/// Finish the latest items request; `None` keeps the previous list
pub fn store_set_items(store: &MenuStore, items: Option<Vec<MenuItem>>) {
    if let Some(items) = items {
        *store.items().write() = items;
    }
    *store.items_loading().write() = false;
}
