//! Property-based tests for the stale-response guard.
//!
//! Whatever order completions arrive in, the displayed listing always
//! corresponds to the latest issued query, and at most one completion is
//! ever applied.

use std::sync::Arc;

use hpass_query::{ListingResponse, QueryDispatcher, QueryOutcome};
use hpass_region::{RegionNode, RegionTree};
use proptest::prelude::*;
use serde_json::json;

fn tree() -> Arc<RegionTree> {
    Arc::new(RegionTree::from_nodes(vec![RegionNode::new("A", 1)]).unwrap())
}

proptest! {
    #[test]
    fn displayed_listing_always_tracks_the_latest_sequence(
        issued in 1usize..8,
        order in proptest::collection::vec(0usize..8, 0..8),
    ) {
        let mut dispatcher = QueryDispatcher::new(tree());
        let pending: Vec<_> = (0..issued).map(|_| dispatcher.startup()).collect();

        let mut updates = 0;
        for &i in order.iter().filter(|&&i| i < issued) {
            let payload = json!({ "from": i });
            let outcome = dispatcher.complete(
                pending[i].seq,
                Ok(ListingResponse::ok(vec![payload])),
            );
            match outcome {
                QueryOutcome::Updated => {
                    prop_assert_eq!(i, issued - 1, "only the latest may update");
                    updates += 1;
                }
                QueryOutcome::Stale => {}
                QueryOutcome::Failed(e) => return Err(TestCaseError::fail(e.to_string())),
            }
        }
        prop_assert!(updates <= 1, "at most one completion applies");

        let latest_completed = order.iter().any(|&i| i == issued - 1);
        if latest_completed {
            prop_assert_eq!(dispatcher.displayed(), [json!({ "from": issued - 1 })]);
        } else {
            prop_assert!(dispatcher.displayed().is_empty());
        }
    }
}
