//! Menu App
//!
//! Wires config, API client, stores and data hooks, then lays out the page.

use leptos::prelude::*;
use leptos_debounce::use_debounced;
use menu_core::api::MenuApi;
use menu_core::domain::apply_filters;
use menu_core::MenuConfig;
use reactive_stores::Store;

use crate::browser;
use crate::components::{CartDrawer, CategoryNav, FavoritesDrawer, FilterBar, Footer, Header, Hero, ItemModal, MenuGrid, Toast};
use crate::context::AppContext;
use crate::hooks::{use_categories, use_deep_linked_item, use_menu_items, use_restaurant};
use crate::store::{MenuState, MenuStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = MenuConfig::from_build_env();
    let api = match MenuApi::from_config(&config) {
        Ok(api) => api,
        Err(e) => {
            log::error!("invalid API base url {:?}: {}", config.api_base_url, e);
            return view! {
                <div class="fatal-error">
                    <h2>"Menu unavailable"</h2>
                    <p>"The menu service address is misconfigured."</p>
                </div>
            }
            .into_any();
        }
    };
    log::info!("menu api at {}", api.base_url());

    // Provide context to all children
    let store = Store::new(MenuState::new());
    provide_context(store);
    let ctx = AppContext::new();
    provide_context(ctx);
    provide_context(config.clone());

    // Theme follows the persisted preference
    Effect::new(move |_| browser::apply_theme(ctx.dark_mode()));

    use_restaurant(store, api.clone());
    use_categories(store, api.clone());

    // Category and debounced search go to the server; the rest filters locally
    let category = Memo::new(move |_| ctx.filters.with(|f| f.category.clone()));
    let search = Memo::new(move |_| ctx.filters.with(|f| f.search.clone()));
    let debounced_search = use_debounced(search.into(), config.search_debounce_ms);
    use_menu_items(store, api.clone(), category.into(), debounced_search.into());

    use_deep_linked_item(ctx, api);

    let visible_items = Memo::new(move |_| store.items().with(|items| ctx.filters.with(|f| apply_filters(items, f))));
    let visible_count = Memo::new(move |_| visible_items.with(|items| items.len()));
    let total_count = Memo::new(move |_| store.items().with(|items| items.len()));

    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                <Hero />
                <CategoryNav />
                <section class="menu-section">
                    <FilterBar visible_count=visible_count total_count=total_count />
                    <MenuGrid items=visible_items />
                </section>
            </main>
            <Footer />

            // Overlays
            <ItemModal />
            <CartDrawer />
            <FavoritesDrawer />
            <Toast />
        </div>
    }
    .into_any()
}
