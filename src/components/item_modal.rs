//! Item Detail Modal
//!
//! Size selection and quantity stepper for the selected item. The running
//! price on the add button follows both.

use leptos::prelude::*;
use menu_core::domain::{format_price, round_cents, MenuItem, SizeVariant};

use super::image_or_placeholder;
use crate::context::use_app_context;

#[component]
pub fn ItemModal() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.selected_item.get().map(|item| view! { <ItemDetail item=item /> })}
    }
}

#[component]
fn ItemDetail(item: MenuItem) -> impl IntoView {
    let ctx = use_app_context();
    let (size, set_size) = signal(SizeVariant::default());
    let (quantity, set_quantity) = signal(1u32);

    let base_price = item.price;
    let line_total = move || round_cents(size.get().unit_price(base_price) * f64::from(quantity.get()));

    let add_item = item.clone();
    let add_to_order = move |_| {
        ctx.add_to_cart(&add_item, size.get_untracked(), quantity.get_untracked());
        ctx.close_item();
    };
    let favorite_item = item.clone();
    let is_favorite = {
        let id = StoredValue::new(item.id.clone());
        move || id.with_value(|id| ctx.is_favorite(id))
    };

    view! {
        <div class="modal-root">
            <div class="modal-backdrop" on:click=move |_| ctx.close_item()></div>
            <div class="modal-card" role="dialog" aria-modal="true">
                <button class="modal-close" title="Close" on:click=move |_| ctx.close_item()>"✕"</button>
                <div class="modal-image">
                    <img src={image_or_placeholder(&item.image)} alt={item.name.clone()} />
                    {item.popular.then(|| view! { <span class="popular-badge">"★ Popular"</span> })}
                </div>
                <div class="modal-body">
                    <div class="modal-heading">
                        <h2>{item.name.clone()}</h2>
                        <button
                            class="favorite-btn"
                            class:active=is_favorite
                            on:click=move |_| ctx.toggle_favorite(&favorite_item)
                        >
                            {move || if is_favorite() { "♥" } else { "♡" }}
                        </button>
                    </div>
                    <p class="modal-price">{format_price(item.price)}</p>
                    <p class="modal-description">{item.description.clone()}</p>

                    <div class="modal-facts">
                        <div class="fact">
                            <span class="fact-label">"Prep Time"</span>
                            <span class="fact-value">{format!("{} mins", item.preparation_time)}</span>
                        </div>
                        <div class="fact">
                            <span class="fact-label">"Spice Level"</span>
                            <span class="fact-value">{item.spice_label()}</span>
                        </div>
                    </div>

                    <div class="size-selector">
                        <h4>"Size"</h4>
                        {SizeVariant::ALL
                            .iter()
                            .copied()
                            .map(|variant| {
                                let extra = variant.price_modifier();
                                view! {
                                    <button
                                        class="size-btn"
                                        class:active=move || size.get() == variant
                                        on:click=move |_| set_size.set(variant)
                                    >
                                        <span>{variant.label()}</span>
                                        {(extra > 0.0).then(|| view! { <span class="size-extra">{format!("+{}", format_price(extra))}</span> })}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="modal-actions">
                        <div class="stepper">
                            <button
                                class="stepper-btn"
                                disabled=move || { quantity.get() <= 1 }
                                on:click=move |_| set_quantity.update(|q| *q = q.saturating_sub(1).max(1))
                            >
                                "−"
                            </button>
                            <span class="stepper-value">{quantity}</span>
                            <button class="stepper-btn" on:click=move |_| set_quantity.update(|q| *q = q.saturating_add(1))>
                                "+"
                            </button>
                        </div>
                        <button class="btn-primary add-to-order" on:click=add_to_order>
                            {move || format!("Add to Order - {}", format_price(line_total()))}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
