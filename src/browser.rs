//! Browser Helpers
//!
//! Small wrappers around `web_sys::window()` calls. All of them are
//! best-effort: failures are logged, never raised.

/// Blocking alert, used for checkout validation messages
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }
}

/// Open `url` in a new tab
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else { return };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => {}
        Ok(None) => log::warn!("popup blocked for {}", url),
        Err(e) => log::error!("could not open {}: {:?}", url, e),
    }
}

/// Toggle the `dark` class on `<html>`
pub fn apply_theme(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", dark) {
        log::warn!("could not apply theme: {:?}", e);
    }
}

/// Current calendar year, for the footer
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
