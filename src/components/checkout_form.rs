//! Checkout Form
//!
//! Collects delivery details and hands the order off to WhatsApp in a new
//! tab. The cart is kept, since the hand-off is not confirmed.

use leptos::prelude::*;
use menu_core::domain::{build_checkout, CustomerDetails};
use menu_core::MenuConfig;

use crate::browser;
use crate::context::use_app_context;
use crate::store::{store_restaurant_untracked, use_menu_store};

#[component]
pub fn CheckoutForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_menu_store();
    let config = use_context::<MenuConfig>().unwrap_or_default();

    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let details = CustomerDetails {
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            address: address.get_untracked(),
            notes: notes.get_untracked(),
        };
        let restaurant = store_restaurant_untracked(&store);
        let number = config.checkout_number(&restaurant.phone);

        let result = ctx
            .cart
            .with_untracked(|cart| build_checkout(&details, cart.lines(), &restaurant.name, number));
        match result {
            Ok(order) => {
                browser::open_in_new_tab(&order.url);
                ctx.show_toast("Opening WhatsApp to send your order");
            }
            Err(e) => {
                log::warn!("checkout blocked: {}", e);
                browser::alert(&capitalize(&e.to_string()));
            }
        }
    };

    view! {
        <form class="checkout-form" on:submit=on_submit>
            <h3>"Delivery Details"</h3>
            <input
                type="text"
                placeholder="Your name *"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                type="tel"
                placeholder="Phone number *"
                prop:value=move || phone.get()
                on:input=move |ev| phone.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Delivery address *"
                rows="2"
                prop:value=move || address.get()
                on:input=move |ev| address.set(event_target_value(&ev))
            ></textarea>
            <textarea
                placeholder="Notes for the kitchen"
                rows="2"
                prop:value=move || notes.get()
                on:input=move |ev| notes.set(event_target_value(&ev))
            ></textarea>
            <button type="submit" class="btn-primary btn-whatsapp" disabled=move || ctx.cart.with(|c| c.is_empty())>
                "Order via WhatsApp"
            </button>
        </form>
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("please fill in: name"), "Please fill in: name");
        assert_eq!(capitalize(""), "");
    }
}
