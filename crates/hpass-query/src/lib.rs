#![forbid(unsafe_code)]

//! Listing query dispatch for the region selector screens.
//!
//! The [`QueryDispatcher`] turns selection-change events into listing
//! requests (unscoped when nothing is selected, area-scoped otherwise) and
//! guards the view against out-of-order network completions: every issued
//! request carries a monotonic [`SeqNo`], and a completion whose sequence is
//! not the latest issued is dropped instead of overwriting newer data.
//!
//! The transport stays external behind [`ListingClient`]; the dispatcher
//! itself never blocks.

mod client;
mod dispatcher;
mod protocol;

pub use client::ListingClient;
pub use dispatcher::{PendingQuery, QueryDispatcher, QueryOutcome, SeqNo};
pub use protocol::{ListingRequest, ListingResponse};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

/// Recoverable listing-query failures.
///
/// Neither variant is fatal: the dispatcher keeps the previously displayed
/// listing and the screen surfaces a transient notification.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("listing request failed in transport: {0}")]
    Transport(String),

    #[error("listing request rejected with status {0}")]
    Status(u16),
}
