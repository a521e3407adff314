//! Site Header
//!
//! Brand name plus theme, favorites and cart buttons with count badges.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_restaurant, use_menu_store};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_menu_store();

    let brand = move || {
        let name = store_restaurant(&store).name;
        if name.trim().is_empty() {
            "Our Menu".to_string()
        } else {
            name
        }
    };
    let favorites_count = move || ctx.favorites.with(|favorites| favorites.len());

    view! {
        <header class="site-header">
            <a class="brand" href="#">{brand}</a>
            <div class="header-actions">
                <button
                    class="icon-btn"
                    title=move || { if ctx.dark_mode() { "Switch to light mode" } else { "Switch to dark mode" } }
                    on:click=move |_| ctx.toggle_dark_mode()
                >
                    {move || if ctx.dark_mode() { "☀️" } else { "🌙" }}
                </button>
                <button class="icon-btn" title="Favorites" on:click=move |_| ctx.favorites_open.set(true)>
                    "♡"
                    <Show when=move || { favorites_count() > 0 }>
                        <span class="badge">{favorites_count}</span>
                    </Show>
                </button>
                <button class="icon-btn" title="Cart" on:click=move |_| ctx.cart_open.set(true)>
                    "🛒"
                    <Show when=move || { ctx.cart_count() > 0 }>
                        <span class="badge">{move || ctx.cart_count()}</span>
                    </Show>
                </button>
            </div>
        </header>
    }
}
