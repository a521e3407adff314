//! Application Context
//!
//! Client-side state shared via the Leptos Context API: the persisted cart,
//! favorites and theme, the filter selection and the open panels.

use leptos::prelude::*;
use menu_core::domain::{format_price, FilterState, MenuItem, SizeVariant};

use crate::deep_link;
use crate::storage::{BrowserCart, BrowserFavorites, BrowserPreferences, BrowserStorage};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Cart lines, persisted on every change
    pub cart: RwSignal<BrowserCart>,
    /// Saved items, persisted on every change
    pub favorites: RwSignal<BrowserFavorites>,
    preferences: RwSignal<BrowserPreferences>,
    /// Category, search text, price, dietary and sort selection
    pub filters: RwSignal<FilterState>,
    pub cart_open: RwSignal<bool>,
    pub favorites_open: RwSignal<bool>,
    /// Item shown in the detail modal
    pub selected_item: RwSignal<Option<MenuItem>>,
    /// Pending toast message (auto-dismissed)
    pub toast: RwSignal<Option<String>>,
}

impl AppContext {
    /// Load persisted state from localStorage
    pub fn new() -> Self {
        Self {
            cart: RwSignal::new(BrowserCart::load(BrowserStorage)),
            favorites: RwSignal::new(BrowserFavorites::load(BrowserStorage)),
            preferences: RwSignal::new(BrowserPreferences::load(BrowserStorage)),
            filters: RwSignal::new(FilterState::default()),
            cart_open: RwSignal::new(false),
            favorites_open: RwSignal::new(false),
            selected_item: RwSignal::new(None),
            toast: RwSignal::new(None),
        }
    }

    pub fn cart_count(&self) -> u32 {
        self.cart.with(|cart| cart.count())
    }

    /// Add to the cart and confirm with a toast; the drawer stays closed
    pub fn add_to_cart(&self, item: &MenuItem, size: SizeVariant, quantity: u32) {
        if quantity == 0 {
            return;
        }
        self.cart.update(|cart| {
            cart.add(item, size, quantity);
        });
        let unit = size.unit_price(item.price);
        self.show_toast(format!(
            "{} x {} ({}) added - {}",
            quantity,
            item.name,
            size.label(),
            format_price(unit * f64::from(quantity))
        ));
    }

    pub fn is_favorite(&self, item_id: &str) -> bool {
        self.favorites.with(|favorites| favorites.is_favorite(item_id))
    }

    pub fn toggle_favorite(&self, item: &MenuItem) {
        let saved = self
            .favorites
            .try_update(|favorites| favorites.toggle(item))
            .unwrap_or(false);
        if saved {
            self.show_toast(format!("{} saved to favorites", item.name));
        } else {
            self.show_toast(format!("{} removed from favorites", item.name));
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.preferences.with(|prefs| prefs.dark_mode())
    }

    pub fn toggle_dark_mode(&self) {
        self.preferences.update(|prefs| {
            prefs.toggle_dark_mode();
        });
    }

    pub fn show_toast(&self, message: impl Into<String>) {
        self.toast.set(Some(message.into()));
    }

    /// Open the detail modal and mirror it into the location hash
    pub fn open_item(&self, item: MenuItem) {
        deep_link::set_item_hash(Some(&item.id));
        self.selected_item.set(Some(item));
    }

    pub fn close_item(&self) {
        self.selected_item.set(None);
        deep_link::set_item_hash(None);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
