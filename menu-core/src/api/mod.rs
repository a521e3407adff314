//! Menu API
//!
//! Typed bindings to the read-only menu REST endpoints.

mod client;
mod query;
mod sequence;

pub use client::MenuApi;
pub use query::MenuQuery;
pub use sequence::{FetchSequence, FetchTicket};
