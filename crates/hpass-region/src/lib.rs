#![forbid(unsafe_code)]

//! Administrative region dataset for the health-pass client.
//!
//! The region hierarchy is fixed at three levels: district, street,
//! community. [`RegionTree`] owns the dataset, is loaded once, and is never
//! mutated afterwards; every screen shares it read-only. Lookup is by exact
//! name, always scoped to the parent node, so equal names under different
//! parents never collide.
//!
//! # Example
//!
//! ```
//! use hpass_region::{RegionNode, RegionTree};
//!
//! let tree = RegionTree::from_nodes(vec![
//!     RegionNode::new("A", 1)
//!         .child(RegionNode::new("A1", 11).child(RegionNode::new("A1a", 111))),
//! ])
//! .unwrap();
//!
//! assert_eq!(tree.children_of(&[]), vec!["A"]);
//! let area = tree.code_of(&["A", "A1", "A1a"]);
//! assert_eq!(area.community, Some(111));
//! ```

mod area;
mod tree;

pub use area::AreaCode;
pub use tree::{RegionNode, RegionTree};

use thiserror::Error;

/// Number of levels below the implicit root: district, street, community.
pub const LEVELS: usize = 3;

pub type Result<T> = std::result::Result<T, RegionError>;

/// Errors raised while loading or validating a region dataset.
///
/// Lookup never errors: an unknown name resolves to an empty child list or an
/// absent code. Only construction is fallible.
#[derive(Debug, Error)]
pub enum RegionError {
    #[error("region dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate sibling name {name:?} under {parent:?}")]
    DuplicateName { parent: String, name: String },

    #[error("node {name:?} exceeds the fixed depth of {LEVELS} levels")]
    TooDeep { name: String },
}
