//! Runtime Configuration
//!
//! The frontend ships as static wasm, so settings are baked in at build time
//! from `MENU_*` environment variables, falling back to defaults.

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    /// Root of the menu REST API
    pub api_base_url: String,
    /// Quiescence window before search text is sent to the API
    pub search_debounce_ms: u32,
    /// How long the toast stays up
    pub toast_duration_ms: u32,
    /// Checkout destination; the restaurant phone is used when unset
    pub whatsapp_number: Option<String>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            whatsapp_number: None,
        }
    }
}

impl MenuConfig {
    /// Settings captured from the environment at compile time
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            "MENU_API_BASE_URL" => option_env!("MENU_API_BASE_URL"),
            "MENU_SEARCH_DEBOUNCE_MS" => option_env!("MENU_SEARCH_DEBOUNCE_MS"),
            "MENU_TOAST_DURATION_MS" => option_env!("MENU_TOAST_DURATION_MS"),
            "MENU_WHATSAPP_NUMBER" => option_env!("MENU_WHATSAPP_NUMBER"),
            _ => None,
        })
    }

    /// Build from an arbitrary key lookup; blank values count as unset
    pub fn from_lookup<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let get = |key: &str| lookup(key).map(str::trim).filter(|value| !value.is_empty());
        let defaults = Self::default();

        Self {
            api_base_url: get("MENU_API_BASE_URL")
                .map(str::to_string)
                .unwrap_or(defaults.api_base_url),
            search_debounce_ms: parse_or(get("MENU_SEARCH_DEBOUNCE_MS"), "MENU_SEARCH_DEBOUNCE_MS", defaults.search_debounce_ms),
            toast_duration_ms: parse_or(get("MENU_TOAST_DURATION_MS"), "MENU_TOAST_DURATION_MS", defaults.toast_duration_ms),
            whatsapp_number: get("MENU_WHATSAPP_NUMBER").map(str::to_string),
        }
    }

    /// Configured number, else the restaurant's phone
    pub fn checkout_number<'a>(&'a self, restaurant_phone: &'a str) -> &'a str {
        self.whatsapp_number.as_deref().unwrap_or(restaurant_phone)
    }
}

fn parse_or(raw: Option<&str>, key: &str, default: u32) -> u32 {
    match raw.map(str::parse::<u32>) {
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            log::warn!("ignoring {}: {}", key, e);
            default
        }
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = MenuConfig::from_lookup(|_| None);
        assert_eq!(config, MenuConfig::default());
        assert_eq!(config.search_debounce_ms, 300);
    }

    #[test]
    fn test_reads_values() {
        let config = MenuConfig::from_lookup(|key| match key {
            "MENU_API_BASE_URL" => Some("https://menu.example.com/api"),
            "MENU_SEARCH_DEBOUNCE_MS" => Some(" 150 "),
            "MENU_WHATSAPP_NUMBER" => Some("94771234567"),
            _ => None,
        });
        assert_eq!(config.api_base_url, "https://menu.example.com/api");
        assert_eq!(config.search_debounce_ms, 150);
        assert_eq!(config.toast_duration_ms, 3000);
        assert_eq!(config.checkout_number("011 222 3333"), "94771234567");
    }

    #[test]
    fn test_bad_numbers_fall_back() {
        let config = MenuConfig::from_lookup(|key| match key {
            "MENU_TOAST_DURATION_MS" => Some("soon"),
            "MENU_WHATSAPP_NUMBER" => Some("   "),
            _ => None,
        });
        assert_eq!(config.toast_duration_ms, 3000);
        assert_eq!(config.checkout_number("011 222 3333"), "011 222 3333");
    }

    #[test]
    fn test_partial_lookup_keeps_other_defaults() {
        let config = MenuConfig::from_lookup(|key| (key == "MENU_API_BASE_URL").then_some("http://10.0.0.2:3001"));
        assert_eq!(config.api_base_url, "http://10.0.0.2:3001");
        assert_eq!(config.search_debounce_ms, DEFAULT_SEARCH_DEBOUNCE_MS);
        assert_eq!(config.whatsapp_number, None);
    }
}
