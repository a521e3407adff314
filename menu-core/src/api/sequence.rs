//! Fetch Sequencing
//!
//! Superseded requests are not aborted. Each dispatch takes a ticket and a
//! response is applied only if its ticket is still the latest one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Ticket handed out for one dispatched request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// Monotonic counter shared between a hook and its in-flight requests
#[derive(Debug, Clone, Default)]
pub struct FetchSequence {
    latest: Arc<AtomicU64>,
}

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request, superseding all earlier ones
    pub fn begin(&self) -> FetchTicket {
        FetchTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
