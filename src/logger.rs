//! Console Logger
//!
//! Routes the `log` facade to the browser console, prefixed with the target.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(record.target(), &record.args().to_string()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// "[menu_core::api::client] GET ..." -> "[api::client] GET ..."
fn format_line(target: &str, message: &str) -> String {
    let short = target
        .strip_prefix("menu_core::")
        .or_else(|| target.strip_prefix("menu_ui::"))
        .unwrap_or(target);
    format!("[{}] {}", short, message)
}

/// Install the console logger (Debug in debug builds, Info otherwise)
pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_shortens_crate_prefix() {
        assert_eq!(format_line("menu_core::api::client", "GET /menuItems"), "[api::client] GET /menuItems");
        assert_eq!(format_line("app", "ready"), "[app] ready");
    }
}
