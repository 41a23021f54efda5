//! Session context for authorized API calls.

/// An authenticated session, passed explicitly to the query collaborator.
///
/// The token is issued at login by an external collaborator; nothing in this
/// core reads or refreshes it, it only travels with requests. Keeping it in a
/// value object (rather than process-global state) lets each screen instance
/// carry exactly the session it was opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    /// Wrap a login-issued token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The bearer token for request authorization.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}
