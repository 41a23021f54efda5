//! Sequence-guarded query dispatch.

use std::fmt;
use std::sync::Arc;

use hpass_region::RegionTree;
use hpass_select::SelectionChanged;
use serde_json::Value;
use tracing::{debug, warn};

use crate::protocol::{ListingRequest, ListingResponse};
use crate::{QueryError, Result};

/// Monotonically increasing identity of an issued query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeqNo(u64);

impl SeqNo {
    /// The raw sequence value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SeqNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A query the screen must hand to its transport: the request to send and
/// the sequence to report completion under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub seq: SeqNo,
    pub request: ListingRequest,
}

/// What a completion did to the view state.
#[derive(Debug)]
pub enum QueryOutcome {
    /// Latest response applied; the displayed listing was replaced.
    Updated,
    /// Superseded (or duplicate) response dropped; display untouched.
    Stale,
    /// Latest request failed; display untouched, failure is recoverable.
    Failed(QueryError),
}

/// Turns selection changes into listing queries and applies completions
/// with a last-write-wins rule.
///
/// One screen instance owns one dispatcher. Exactly one query is issued per
/// selection change; a newer change supersedes any prior in-flight request,
/// whose late completion is then dropped rather than applied.
#[derive(Debug)]
pub struct QueryDispatcher {
    tree: Arc<RegionTree>,
    next_seq: u64,
    latest: Option<SeqNo>,
    latest_done: bool,
    displayed: Vec<Value>,
}

impl QueryDispatcher {
    /// Create a dispatcher resolving area codes against the shared tree.
    #[must_use]
    pub fn new(tree: Arc<RegionTree>) -> Self {
        Self {
            tree,
            next_seq: 0,
            latest: None,
            latest_done: false,
            displayed: Vec::new(),
        }
    }

    /// The initial query at screen entry: nothing selected yet, so the
    /// unscoped listing.
    pub fn startup(&mut self) -> PendingQuery {
        self.issue(ListingRequest::unscoped())
    }

    /// React to a selector change event with exactly one new query.
    pub fn on_selection_changed(&mut self, change: &SelectionChanged) -> PendingQuery {
        let path = change.path();
        let request = if path.is_empty() {
            ListingRequest::unscoped()
        } else {
            ListingRequest::scoped(self.tree.code_of(&path.names()))
        };
        self.issue(request)
    }

    /// Apply a completed request.
    ///
    /// Only the latest issued sequence may touch the display; everything
    /// else comes back [`QueryOutcome::Stale`]. A failing latest request
    /// leaves the previously displayed listing in place.
    pub fn complete(&mut self, seq: SeqNo, result: Result<ListingResponse>) -> QueryOutcome {
        if self.latest != Some(seq) || self.latest_done {
            debug!(%seq, "dropping superseded listing response");
            return QueryOutcome::Stale;
        }
        self.latest_done = true;
        match result {
            Ok(response) if response.is_ok() => {
                self.displayed = response.into_items();
                debug!(%seq, items = self.displayed.len(), "listing updated");
                QueryOutcome::Updated
            }
            Ok(response) => {
                let status = response.status_code();
                warn!(%seq, status, "listing request rejected");
                QueryOutcome::Failed(QueryError::Status(status))
            }
            Err(err) => {
                warn!(%seq, error = %err, "listing request failed");
                QueryOutcome::Failed(err)
            }
        }
    }

    /// The currently displayed listing records.
    #[must_use]
    pub fn displayed(&self) -> &[Value] {
        &self.displayed
    }

    fn issue(&mut self, request: ListingRequest) -> PendingQuery {
        let seq = SeqNo(self.next_seq);
        self.next_seq += 1;
        self.latest = Some(seq);
        self.latest_done = false;
        debug!(%seq, scoped = request.is_scoped(), "issuing listing query");
        PendingQuery { seq, request }
    }
}
