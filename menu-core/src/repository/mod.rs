//! Repository Layer
//!
//! Key-value persistence abstractions and implementations.

mod traits;
mod memory;
mod json;

pub use traits::KeyValueStore;
#[cfg(test)]
pub use traits::MockKeyValueStore;
pub use memory::MemoryStore;
pub use json::{load_collection, load_value, save_collection, save_value};

/// Storage key for the serialized cart lines
pub const CART_KEY: &str = "cart";
/// Storage key for the serialized favorite items
pub const FAVORITES_KEY: &str = "favorites";
/// Storage key for the dark-mode preference
pub const DARK_MODE_KEY: &str = "darkMode";
