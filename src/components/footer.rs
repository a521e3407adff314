//! Site Footer
//!
//! Restaurant contact details and opening hours.

use leptos::prelude::*;

use crate::browser;
use crate::store::{store_restaurant, use_menu_store};

#[component]
pub fn Footer() -> impl IntoView {
    let store = use_menu_store();
    let year = browser::current_year();

    let name = move || {
        let name = store_restaurant(&store).name;
        if name.trim().is_empty() { "Our Restaurant".to_string() } else { name }
    };

    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-about">
                    <h4>{name}</h4>
                    <p>{move || store_restaurant(&store).description}</p>
                </div>
                <div class="footer-contact">
                    <h4>"Contact"</h4>
                    <p>{move || store_restaurant(&store).address}</p>
                    <p>{move || store_restaurant(&store).phone}</p>
                </div>
                <div class="footer-hours">
                    <h4>"Opening Hours"</h4>
                    <p>{move || store_restaurant(&store).hours}</p>
                </div>
            </div>
            <p class="footer-copy">{move || format!("© {} {}. All rights reserved.", year, name())}</p>
        </footer>
    }
}
