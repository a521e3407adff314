//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for keyed domain entities,
//! plus the crate-wide error type.

use thiserror::Error;

/// Core trait for entities that live in keyed collections
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Errors raised by the API client, persistence and checkout validation
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("base url cannot carry path segments: {0}")]
    InvalidBaseUrl(String),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("malformed data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error("please fill in: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("your cart is empty")]
    EmptyCart,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
