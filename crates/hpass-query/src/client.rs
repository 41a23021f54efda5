//! Transport boundary for listing queries.

use hpass_model::Session;

use crate::Result;
use crate::protocol::{ListingRequest, ListingResponse};

/// The external transport collaborator.
///
/// Implementations own everything the core does not specify: endpoint
/// routing (the unscoped and area-scoped listings are distinct endpoints
/// upstream), serialization, authorization headers from the [`Session`],
/// timeouts. The dispatcher only cares that each issued request eventually
/// produces exactly one `fetch` result, reported back under its sequence
/// number.
pub trait ListingClient {
    /// Perform one listing request on behalf of `session`.
    ///
    /// # Errors
    ///
    /// [`QueryError::Transport`] for connectivity failures; application
    /// failures travel inside a [`ListingResponse`] with a non-200 status.
    ///
    /// [`QueryError::Transport`]: crate::QueryError::Transport
    fn fetch(&self, session: &Session, request: &ListingRequest) -> Result<ListingResponse>;
}

impl<T: ListingClient + ?Sized> ListingClient for &T {
    fn fetch(&self, session: &Session, request: &ListingRequest) -> Result<ListingResponse> {
        (**self).fetch(session, request)
    }
}
