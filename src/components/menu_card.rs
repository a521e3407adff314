//! Menu Card
//!
//! One item in the grid. Clicking opens the detail modal; the heart toggles
//! the favorite without opening it.

use leptos::prelude::*;
use menu_core::domain::{format_price, DietaryTag, MenuItem};

use super::image_or_placeholder;
use crate::context::use_app_context;

#[component]
pub fn MenuCard(item: MenuItem) -> impl IntoView {
    let ctx = use_app_context();

    let item_id = StoredValue::new(item.id.clone());
    let is_favorite = move || item_id.with_value(|id| ctx.is_favorite(id));

    let open_item = item.clone();
    let favorite_item = item.clone();

    // Known tags get their label, anything else is shown as sent
    let tags: Vec<String> = item
        .dietary
        .iter()
        .map(|tag| tag.parse::<DietaryTag>().map(|t| t.label().to_string()).unwrap_or_else(|_| tag.clone()))
        .collect();

    view! {
        <article class="menu-card" on:click=move |_| ctx.open_item(open_item.clone())>
            <div class="menu-card-image">
                <img src={image_or_placeholder(&item.image)} alt={item.name.clone()} loading="lazy" />
                {item.popular.then(|| view! { <span class="popular-badge">"★ Popular"</span> })}
                <button
                    class="favorite-btn"
                    class:active=is_favorite
                    title="Toggle favorite"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.toggle_favorite(&favorite_item);
                    }
                >
                    {move || if is_favorite() { "♥" } else { "♡" }}
                </button>
            </div>
            <div class="menu-card-body">
                <div class="menu-card-heading">
                    <h3>{item.name.clone()}</h3>
                    <span class="price">{format_price(item.price)}</span>
                </div>
                <p class="menu-card-description">{item.description.clone()}</p>
                <div class="menu-card-meta">
                    <span class="prep-time">{format!("⏱ {} min", item.preparation_time)}</span>
                    {item.is_spicy().then(|| view! {
                        <span class="spice" title={item.spice_label()}>{"🌶".repeat(usize::from(item.spicy_level.min(3)))}</span>
                    })}
                    {tags.into_iter().map(|tag| view! { <span class="dietary-tag">{tag}</span> }).collect_view()}
                </div>
            </div>
        </article>
    }
}
