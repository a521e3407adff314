//! Cart Drawer
//!
//! Lines with quantity steppers, the running total and checkout.

use leptos::prelude::*;
use menu_core::domain::{format_price, CartLine};

use super::CheckoutForm;
use crate::context::use_app_context;

#[component]
pub fn CartDrawer() -> impl IntoView {
    let ctx = use_app_context();
    let cart = ctx.cart;
    let close = move |_| ctx.cart_open.set(false);

    view! {
        <Show when=move || ctx.cart_open.get()>
            <div class="drawer-root">
                <div class="drawer-backdrop" on:click=close></div>
                <aside class="drawer">
                    <div class="drawer-header">
                        <h2>"Your Order"</h2>
                        <button class="drawer-close" title="Close" on:click=close>"✕"</button>
                    </div>
                    <div class="drawer-body">
                        <Show
                            when=move || cart.with(|c| !c.is_empty())
                            fallback=|| view! {
                                <div class="drawer-empty">
                                    <span class="empty-icon">"🛒"</span>
                                    <p>"Your cart is empty"</p>
                                </div>
                            }
                        >
                            <ul class="cart-lines">
                                <For
                                    each=move || cart.with(|c| c.lines().to_vec())
                                    key=|line| line.key()
                                    children=move |line| view! { <CartLineRow line=line /> }
                                />
                            </ul>
                        </Show>
                    </div>
                    <div class="drawer-footer">
                        <div class="cart-total">
                            <span>"Total"</span>
                            <span class="cart-total-value">{move || format_price(cart.with(|c| c.total()))}</span>
                        </div>
                        <button
                            class="btn-secondary"
                            disabled=move || cart.with(|c| c.is_empty())
                            on:click=move |_| cart.update(|c| c.clear())
                        >
                            "Clear Cart"
                        </button>
                        <CheckoutForm />
                    </div>
                </aside>
            </div>
        </Show>
    }
}

/// A line reads its quantity back from the cart, so the keyed row stays live
#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let cart = use_app_context().cart;
    let key = StoredValue::new(line.key());

    let quantity = move || key.with_value(|key| cart.with(|c| c.line(key).map(|l| l.quantity).unwrap_or(0)));
    let subtotal = move || key.with_value(|key| cart.with(|c| c.line(key).map(|l| l.subtotal()).unwrap_or(0.0)));

    view! {
        <li class="cart-line">
            <img class="cart-line-image" src={super::image_or_placeholder(&line.image)} alt={line.name.clone()} />
            <div class="cart-line-info">
                <span class="cart-line-name">{line.name.clone()}</span>
                <span class="cart-line-meta">{format!("{} · {} each", line.size.label(), format_price(line.unit_price))}</span>
                <div class="stepper">
                    <button
                        class="stepper-btn"
                        title="Decrease"
                        on:click=move |_| key.with_value(|key| cart.update(|c| { c.decrement(key); }))
                    >
                        "−"
                    </button>
                    <span class="stepper-value">{quantity}</span>
                    <button
                        class="stepper-btn"
                        title="Increase"
                        on:click=move |_| key.with_value(|key| cart.update(|c| { c.increment(key); }))
                    >
                        "+"
                    </button>
                </div>
            </div>
            <div class="cart-line-side">
                <span class="cart-line-subtotal">{move || format_price(subtotal())}</span>
                <button
                    class="remove-btn"
                    title="Remove"
                    on:click=move |_| key.with_value(|key| cart.update(|c| { c.remove(key); }))
                >
                    "🗑"
                </button>
            </div>
        </li>
    }
}
