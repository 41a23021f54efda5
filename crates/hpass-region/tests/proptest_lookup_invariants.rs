//! Property-based tests for region lookup.
//!
//! Lookup must fail closed for any input: unknown names yield empty child
//! lists and absent codes, and an absent segment forces everything below it
//! absent too. Nothing panics.

use hpass_region::{RegionNode, RegionTree};
use proptest::prelude::*;

fn arb_tree() -> impl Strategy<Value = RegionTree> {
    let communities = 0usize..4;
    let streets = proptest::collection::vec(communities, 0..4);
    let districts = proptest::collection::vec(streets, 0..5);
    districts.prop_map(|shape| {
        let districts = shape
            .into_iter()
            .enumerate()
            .map(|(d, streets)| {
                let children = streets
                    .into_iter()
                    .enumerate()
                    .map(|(s, communities)| {
                        let leaves = (0..communities)
                            .map(|c| {
                                RegionNode::new(
                                    format!("c{c}"),
                                    (d * 10_000 + s * 100 + c + 1) as i64,
                                )
                            })
                            .collect();
                        RegionNode::new(format!("s{s}"), (d * 100 + s + 1) as i64)
                            .with_children(leaves)
                    })
                    .collect();
                RegionNode::new(format!("d{d}"), (d + 1) as i64).with_children(children)
            })
            .collect();
        RegionTree::from_nodes(districts).expect("generated trees are valid")
    })
}

/// Path segments that may or may not exist in the generated tree.
fn arb_path() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[dsc][0-9]|bogus", 0..4)
}

proptest! {
    #[test]
    fn codes_are_absent_from_the_first_unresolved_segment(
        tree in arb_tree(),
        path in arb_path(),
    ) {
        let names: Vec<&str> = path.iter().map(String::as_str).collect();
        let area = tree.code_of(&names);

        // no code below a gap
        if area.district.is_none() {
            prop_assert!(area.street.is_none());
        }
        if area.street.is_none() {
            prop_assert!(area.community.is_none());
        }

        // a resolved segment implies the name really is a child at that level
        if area.district.is_some() {
            prop_assert!(tree.children_of(&[]).contains(&names[0]));
        }
        if area.street.is_some() {
            prop_assert!(tree.children_of(&[names[0]]).contains(&names[1]));
        }
    }
}

proptest! {
    #[test]
    fn children_of_never_panics_and_fails_closed(
        tree in arb_tree(),
        path in arb_path(),
    ) {
        let names: Vec<&str> = path.iter().map(String::as_str).collect();
        let children = tree.children_of(&names);
        if names.iter().any(|n| *n == "bogus") {
            prop_assert!(children.is_empty(), "unknown segment must yield no options");
        }
    }
}
