//! Client State Stores
//!
//! Explicit store objects over an injected `KeyValueStore`. Each store loads
//! once on construction and rewrites its key after every mutation.

mod cart_store;
mod favorites_store;
mod preferences;

#[cfg(test)]
mod tests;

pub use cart_store::CartStore;
pub use favorites_store::FavoritesStore;
pub use preferences::PreferenceStore;
