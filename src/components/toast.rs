//! Toast Notification
//!
//! Shows `AppContext::toast` and clears it after the configured delay.

use leptos::prelude::*;
use leptos_debounce::use_auto_dismiss;
use menu_core::MenuConfig;

use crate::context::use_app_context;

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_app_context();
    let duration_ms = use_context::<MenuConfig>().unwrap_or_default().toast_duration_ms;
    use_auto_dismiss(ctx.toast, duration_ms);

    view! {
        {move || ctx.toast.get().map(|message| view! {
            <div class="toast" role="status">
                <span class="toast-icon">"✓"</span>
                <p class="toast-message">{message}</p>
                <button class="toast-close" title="Dismiss" on:click=move |_| ctx.toast.set(None)>"✕"</button>
            </div>
        })}
    }
}
