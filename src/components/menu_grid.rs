//! Menu Grid
//!
//! Skeleton cards while loading, an empty state when nothing matches.

use leptos::prelude::*;
use menu_core::domain::MenuItem;

use super::MenuCard;
use crate::store::{use_menu_store, MenuStateStoreFields};

const SKELETON_CARDS: usize = 6;

#[component]
pub fn MenuGrid(#[prop(into)] items: Signal<Vec<MenuItem>>) -> impl IntoView {
    let store = use_menu_store();

    view! {
        <Show
            when=move || !store.items_loading().get()
            fallback=|| view! {
                <div class="menu-grid">
                    {(0..SKELETON_CARDS).map(|_| view! { <div class="menu-card skeleton"></div> }).collect_view()}
                </div>
            }
        >
            <Show
                when=move || items.with(|items| !items.is_empty())
                fallback=|| view! {
                    <div class="empty-state">
                        <span class="empty-icon">"🍽️"</span>
                        <h3>"No items found"</h3>
                        <p>"Try a different search or clear some filters."</p>
                    </div>
                }
            >
                <div class="menu-grid">
                    <For
                        each=move || items.get()
                        key=|item| item.id.clone()
                        children=move |item| view! { <MenuCard item=item /> }
                    />
                </div>
            </Show>
        </Show>
    }
}
