//! Favorites Drawer

use leptos::prelude::*;
use menu_core::domain::{format_price, MenuItem};

use super::image_or_placeholder;
use crate::context::use_app_context;

#[component]
pub fn FavoritesDrawer() -> impl IntoView {
    let ctx = use_app_context();
    let favorites = ctx.favorites;
    let close = move |_| ctx.favorites_open.set(false);

    view! {
        <Show when=move || ctx.favorites_open.get()>
            <div class="drawer-root">
                <div class="drawer-backdrop" on:click=close></div>
                <aside class="drawer">
                    <div class="drawer-header">
                        <h2>"Favorites"</h2>
                        <button class="drawer-close" title="Close" on:click=close>"✕"</button>
                    </div>
                    <div class="drawer-body">
                        <Show
                            when=move || favorites.with(|f| !f.is_empty())
                            fallback=|| view! {
                                <div class="drawer-empty">
                                    <span class="empty-icon">"♡"</span>
                                    <p>"No favorites yet. Tap the heart on a dish to save it."</p>
                                </div>
                            }
                        >
                            <ul class="favorite-list">
                                <For
                                    each=move || favorites.with(|f| f.items().to_vec())
                                    key=|item| item.id.clone()
                                    children=move |item| view! { <FavoriteRow item=item /> }
                                />
                            </ul>
                        </Show>
                    </div>
                </aside>
            </div>
        </Show>
    }
}

#[component]
fn FavoriteRow(item: MenuItem) -> impl IntoView {
    let ctx = use_app_context();
    let open_item = item.clone();
    let remove_id = item.id.clone();

    view! {
        <li class="favorite-row">
            <img class="favorite-image" src={image_or_placeholder(&item.image)} alt={item.name.clone()} />
            <button
                class="favorite-link"
                on:click=move |_| {
                    ctx.favorites_open.set(false);
                    ctx.open_item(open_item.clone());
                }
            >
                <span class="favorite-name">{item.name.clone()}</span>
                <span class="favorite-price">{format_price(item.price)}</span>
            </button>
            <button
                class="remove-btn"
                title="Remove from favorites"
                on:click=move |_| ctx.favorites.update(|f| { f.remove(&remove_id); })
            >
                "✕"
            </button>
        </li>
    }
}
