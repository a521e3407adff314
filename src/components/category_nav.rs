//! Category Navigation
//!
//! Horizontal pill list; the active category drives the server query.

use leptos::prelude::*;
use menu_core::domain::Category;

use crate::context::use_app_context;
use crate::store::{use_menu_store, MenuStateStoreFields};

#[component]
pub fn CategoryNav() -> impl IntoView {
    let store = use_menu_store();

    view! {
        <nav class="category-nav">
            <Show
                when=move || !store.categories_loading().get()
                fallback=|| view! {
                    <div class="category-list">
                        {(0..5).map(|_| view! { <span class="category-btn skeleton"></span> }).collect_view()}
                    </div>
                }
            >
                <div class="category-list">
                    <For
                        each=move || store.categories().get()
                        key=|category| category.id.clone()
                        children=move |category| view! { <CategoryButton category=category /> }
                    />
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn CategoryButton(category: Category) -> impl IntoView {
    let filters = use_app_context().filters;
    let active_id = category.id.clone();
    let select_id = category.id.clone();

    view! {
        <button
            class="category-btn"
            class:active=move || filters.with(|f| f.category == active_id)
            on:click=move |_| {
                let id = select_id.clone();
                filters.update(|f| f.category = id);
            }
        >
            {category.icon.clone().map(|icon| view! { <span class="category-icon">{icon}</span> })}
            <span class="category-name">{category.name.clone()}</span>
        </button>
    }
}
