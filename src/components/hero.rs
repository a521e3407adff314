//! Hero Banner
//!
//! Restaurant name and tagline with the search box.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_restaurant, use_menu_store, MenuStateStoreFields};

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_menu_store();
    let filters = ctx.filters;

    let title = move || {
        let name = store_restaurant(&store).name;
        if name.trim().is_empty() { "Welcome".to_string() } else { name }
    };
    let tagline = move || {
        let tagline = store_restaurant(&store).tagline;
        if tagline.trim().is_empty() { "Experience culinary excellence".to_string() } else { tagline }
    };
    let search = move || filters.with(|f| f.search.clone());

    view! {
        <section class="hero">
            <Show
                when=move || !store.restaurant_loading().get()
                fallback=|| view! {
                    <div class="hero-skeleton">
                        <div class="skeleton skeleton-title"></div>
                        <div class="skeleton skeleton-line"></div>
                    </div>
                }
            >
                <h1 class="hero-title">{title}</h1>
                <p class="hero-tagline">{tagline}</p>
            </Show>
            <div class="search-box">
                <span class="search-icon">"🔍"</span>
                <input
                    type="text"
                    placeholder="Search for dishes..."
                    prop:value=search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| f.search = value);
                    }
                />
                <Show when=move || !search().is_empty()>
                    <button class="clear-search" title="Clear search" on:click=move |_| filters.update(|f| f.search.clear())>
                        "✕"
                    </button>
                </Show>
            </div>
        </section>
    }
}
