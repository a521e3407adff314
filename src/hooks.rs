//! Data Loading Hooks
//!
//! Each hook starts its fetch and writes the result into the `MenuStore`.
//! Failures are logged and keep whatever was shown before; loading flags always
//! settle back to false.

use leptos::prelude::*;
use leptos::task::spawn_local;
use menu_core::api::{FetchSequence, MenuApi, MenuQuery};

use crate::context::AppContext;
use crate::deep_link;
use crate::store::{store_begin_items, store_set_categories, store_set_items, store_set_restaurant, MenuStore};

/// Fetch the restaurant profile once
pub fn use_restaurant(store: MenuStore, api: MenuApi) {
    spawn_local(async move {
        match api.restaurant().await {
            Ok(restaurant) => store_set_restaurant(&store, Some(restaurant)),
            Err(e) => {
                log::error!("failed to load restaurant: {}", e);
                store_set_restaurant(&store, None);
            }
        }
    });
}

/// Fetch the category list once
pub fn use_categories(store: MenuStore, api: MenuApi) {
    spawn_local(async move {
        match api.categories().await {
            Ok(categories) => store_set_categories(&store, Some(categories)),
            Err(e) => {
                log::error!("failed to load categories: {}", e);
                store_set_categories(&store, None);
            }
        }
    });
}

/// Refetch items whenever the category or (debounced) search changes
///
/// Responses that arrive after a newer request was started are dropped.
pub fn use_menu_items(store: MenuStore, api: MenuApi, category: Signal<String>, search: Signal<String>) {
    let sequence = FetchSequence::new();

    Effect::new(move |_| {
        let query = MenuQuery::new(&category.get(), &search.get());
        let ticket = sequence.begin();
        let api = api.clone();
        let sequence = sequence.clone();
        store_begin_items(&store);

        spawn_local(async move {
            let result = api.menu_items(&query).await;
            if !sequence.is_current(ticket) {
                log::debug!("dropping stale items response for {:?}", query);
                return;
            }
            match result {
                Ok(items) => store_set_items(&store, Some(items)),
                Err(e) => {
                    log::error!("failed to load menu items: {}", e);
                    store_set_items(&store, None);
                }
            }
        });
    });
}

/// Open the item named in `#item=<id>` on startup
pub fn use_deep_linked_item(ctx: AppContext, api: MenuApi) {
    let Some(item_id) = deep_link::current_item_id() else {
        return;
    };

    spawn_local(async move {
        match api.menu_item(&item_id).await {
            Ok(item) => ctx.selected_item.set(Some(item)),
            Err(e) => {
                log::warn!("deep-linked item {} unavailable: {}", item_id, e);
                deep_link::set_item_hash(None);
            }
        }
    });
}
