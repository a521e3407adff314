//! Menu Core
//!
//! Layered architecture:
//! - domain: menu entities, filter pipeline and checkout rules
//! - repository: key-value persistence abstractions and implementations
//! - store: cart, favorites and preference stores mirrored to persistence
//! - api: typed client for the menu REST endpoints
//! - config: runtime settings

pub mod api;
pub mod config;
pub mod domain;
pub mod repository;
pub mod store;

pub use config::MenuConfig;
pub use domain::{MenuError, MenuResult};
