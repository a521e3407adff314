//! Item Deep Links
//!
//! The open item is mirrored into the location hash as `#item=<id>` so a
//! dish can be shared and reopened on load.

const ITEM_PREFIX: &str = "item=";

/// Extract the item id from a location hash
pub fn item_id_from_hash(hash: &str) -> Option<String> {
    hash.trim_start_matches('#')
        .strip_prefix(ITEM_PREFIX)
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

pub fn current_item_id() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    item_id_from_hash(&hash)
}

/// Point the hash at `id`, or clear it
pub fn set_item_hash(id: Option<&str>) {
    let Some(window) = web_sys::window() else { return };
    let hash = id.map(|id| format!("{}{}", ITEM_PREFIX, id)).unwrap_or_default();
    if let Err(e) = window.location().set_hash(&hash) {
        log::warn!("could not update location hash: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_from_hash() {
        assert_eq!(item_id_from_hash("#item=42").as_deref(), Some("42"));
        assert_eq!(item_id_from_hash("item=m-7").as_deref(), Some("m-7"));
        assert_eq!(item_id_from_hash("#item="), None);
        assert_eq!(item_id_from_hash("#about"), None);
        assert_eq!(item_id_from_hash(""), None);
    }
}
