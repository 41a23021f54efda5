#![forbid(unsafe_code)]

//! Cascading region selector.
//!
//! Three dependent selection widgets (district, street, community) share one
//! controller: selecting at any level invalidates everything below it,
//! re-derives the child option lists from the region tree, and auto-selects
//! the first child so a selection is never left dangling while options
//! exist. Each successful mutation yields exactly one [`SelectionChanged`]
//! event; nothing observes intermediate state during the recompute.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use hpass_region::{RegionNode, RegionTree};
//! use hpass_select::CascadingSelector;
//!
//! let tree = Arc::new(
//!     RegionTree::from_nodes(vec![
//!         RegionNode::new("A", 1)
//!             .child(RegionNode::new("A1", 11).child(RegionNode::new("A1a", 111))),
//!     ])
//!     .unwrap(),
//! );
//!
//! let mut selector = CascadingSelector::new(tree);
//! let change = selector.select_district(0).unwrap();
//! assert_eq!(change.path().district(), Some("A"));
//! // children auto-selected down the chain
//! assert_eq!(change.path().community(), Some("A1a"));
//! ```

mod path;
mod selector;

pub use path::{SelectionChanged, SelectionPath};
pub use selector::{CascadingSelector, OptionSet};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SelectError>;

/// The three selector levels, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    District,
    Street,
    Community,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::District => "district",
            Self::Street => "street",
            Self::Community => "community",
        };
        f.write_str(name)
    }
}

/// Errors rejected locally by the selector; state is never touched on the
/// error path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("{level} index {index} out of range ({len} options)")]
    InvalidSelection {
        level: Level,
        index: usize,
        len: usize,
    },

    #[error("cannot select a {level} before its parent level")]
    IncompleteAncestor { level: Level },
}
