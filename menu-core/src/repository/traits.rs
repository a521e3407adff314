//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for durable client-side storage.
//! Implementations can use browser localStorage, in-memory maps, etc.

use crate::domain::MenuResult;

/// String key-value storage, shaped after the browser's `localStorage`
///
/// Methods take `&self`; implementations handle their own interior mutability.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> MenuResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &str, value: &str) -> MenuResult<()>;

    /// Delete `key` if present
    fn remove(&self, key: &str) -> MenuResult<()>;
}
