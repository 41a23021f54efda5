//! Region tree: nodes, validation, lookup, and the process-wide install.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use serde::Deserialize;

use crate::area::AreaCode;
use crate::{LEVELS, RegionError, Result};

/// Bundled region dataset shipped with the client.
const VILLAGES_JSON: &str = include_str!("../assets/villages.json");

static GLOBAL: OnceLock<Arc<RegionTree>> = OnceLock::new();

/// A node in the region hierarchy.
///
/// `name` is the lookup key among its siblings; insertion order is the
/// canonical display order.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionNode {
    name: String,
    code: i64,
    #[serde(default)]
    children: Vec<RegionNode>,
}

impl RegionNode {
    /// Create a leaf node with the given name and code.
    #[must_use]
    pub fn new(name: impl Into<String>, code: i64) -> Self {
        Self {
            name: name.into(),
            code,
            children: Vec::new(),
        }
    }

    /// Add a child node.
    #[must_use]
    pub fn child(mut self, node: RegionNode) -> Self {
        self.children.push(node);
        self
    }

    /// Set children from a vec.
    #[must_use]
    pub fn with_children(mut self, nodes: Vec<RegionNode>) -> Self {
        self.children = nodes;
        self
    }

    /// Node name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Numeric administrative code.
    #[must_use]
    pub fn code(&self) -> i64 {
        self.code
    }

    /// Child nodes in display order.
    #[must_use]
    pub fn children(&self) -> &[RegionNode] {
        &self.children
    }

    fn find(&self, name: &str) -> Option<&RegionNode> {
        self.children.iter().find(|n| n.name == name)
    }
}

/// Immutable three-level region hierarchy.
///
/// The implicit root carries no code; its children are the districts.
#[derive(Debug, Clone)]
pub struct RegionTree {
    districts: Vec<RegionNode>,
}

impl RegionTree {
    /// Build a tree from district nodes, validating the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::DuplicateName`] when two siblings share a name
    /// and [`RegionError::TooDeep`] when a community-level node has children.
    pub fn from_nodes(districts: Vec<RegionNode>) -> Result<Self> {
        validate_siblings("<root>", &districts, 1)?;
        Ok(Self { districts })
    }

    /// Parse a tree from the nested JSON form `[{name, code, children}, ..]`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::Json`] on malformed input, plus the validation
    /// errors of [`RegionTree::from_nodes`].
    pub fn from_json(json: &str) -> Result<Self> {
        let districts: Vec<RegionNode> = serde_json::from_str(json)?;
        Self::from_nodes(districts)
    }

    /// Parse the dataset bundled with the client.
    ///
    /// # Errors
    ///
    /// Propagates [`RegionTree::from_json`] errors; the shipped asset is
    /// expected to always parse.
    pub fn bundled() -> Result<Self> {
        Self::from_json(VILLAGES_JSON)
    }

    /// Install a tree as the process-wide shared dataset.
    ///
    /// The first call wins; later calls are a no-op that returns the tree
    /// already installed. There is no runtime mutation thereafter.
    pub fn load(tree: RegionTree) -> Arc<RegionTree> {
        GLOBAL.get_or_init(|| Arc::new(tree)).clone()
    }

    /// The installed process-wide tree, if [`RegionTree::load`] ran.
    #[must_use]
    pub fn global() -> Option<Arc<RegionTree>> {
        GLOBAL.get().cloned()
    }

    /// District nodes in display order.
    #[must_use]
    pub fn districts(&self) -> &[RegionNode] {
        &self.districts
    }

    /// Ordered child names one level below the given name prefix.
    ///
    /// An empty prefix lists the districts. Any prefix segment that does not
    /// resolve yields an empty list — lookup fails closed, callers treat
    /// empty as "no options".
    #[must_use]
    pub fn children_of(&self, prefix: &[&str]) -> Vec<&str> {
        if prefix.len() >= LEVELS {
            return Vec::new();
        }
        match self.node_at(prefix) {
            Some(children) => children.iter().map(|n| n.name.as_str()).collect(),
            None => Vec::new(),
        }
    }

    /// Resolve the numeric codes along a (possibly partial) name path.
    ///
    /// Each segment resolves against its parent; an unresolved segment and
    /// everything below it come back absent.
    #[must_use]
    pub fn code_of(&self, path: &[&str]) -> AreaCode {
        let mut area = AreaCode::default();
        let mut children = self.districts.as_slice();
        let slots = [&mut area.district, &mut area.street, &mut area.community];
        for (segment, slot) in path.iter().take(LEVELS).zip(slots) {
            let Some(node) = children.iter().find(|n| n.name == *segment) else {
                break;
            };
            *slot = Some(node.code);
            children = &node.children;
        }
        area
    }

    /// Children of the node reached by walking `prefix`, or `None` when any
    /// segment is unknown.
    fn node_at(&self, prefix: &[&str]) -> Option<&[RegionNode]> {
        let mut children = self.districts.as_slice();
        for segment in prefix {
            let node = children.iter().find(|n| n.name == *segment)?;
            children = &node.children;
        }
        Some(children)
    }
}

fn validate_siblings(parent: &str, siblings: &[RegionNode], depth: usize) -> Result<()> {
    let mut seen = HashSet::new();
    for node in siblings {
        if !seen.insert(node.name.as_str()) {
            return Err(RegionError::DuplicateName {
                parent: parent.to_string(),
                name: node.name.clone(),
            });
        }
        if !node.children.is_empty() {
            if depth >= LEVELS {
                return Err(RegionError::TooDeep {
                    name: node.name.clone(),
                });
            }
            validate_siblings(&node.name, &node.children, depth + 1)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RegionTree {
        RegionTree::from_nodes(vec![
            RegionNode::new("East", 1)
                .child(
                    RegionNode::new("First St", 11)
                        .child(RegionNode::new("Sunrise", 111))
                        .child(RegionNode::new("Harbor", 112)),
                )
                .child(RegionNode::new("Second St", 12).child(RegionNode::new("Gardens", 121))),
            RegionNode::new("West", 2).child(RegionNode::new("Third St", 21)),
        ])
        .unwrap()
    }

    #[test]
    fn children_of_root_lists_districts_in_order() {
        let tree = sample();
        assert_eq!(tree.children_of(&[]), vec!["East", "West"]);
    }

    #[test]
    fn children_of_unknown_prefix_is_empty() {
        let tree = sample();
        assert!(tree.children_of(&["Nowhere"]).is_empty());
        assert!(tree.children_of(&["East", "Nowhere"]).is_empty());
    }

    #[test]
    fn children_of_beyond_leaf_level_is_empty() {
        let tree = sample();
        assert!(tree.children_of(&["East", "First St", "Sunrise"]).is_empty());
    }

    #[test]
    fn code_of_resolves_full_path() {
        let tree = sample();
        let area = tree.code_of(&["East", "First St", "Harbor"]);
        assert_eq!(area.district, Some(1));
        assert_eq!(area.street, Some(11));
        assert_eq!(area.community, Some(112));
        assert!(area.is_complete());
    }

    #[test]
    fn code_of_stops_at_first_unresolved_segment() {
        let tree = sample();
        let area = tree.code_of(&["East", "Nowhere", "Harbor"]);
        assert_eq!(area.district, Some(1));
        assert_eq!(area.street, None);
        // "Harbor" exists elsewhere but may not be resolved past a gap.
        assert_eq!(area.community, None);
    }

    #[test]
    fn code_of_empty_path_is_empty() {
        let tree = sample();
        assert!(tree.code_of(&[]).is_empty());
    }

    #[test]
    fn name_collisions_across_parents_stay_scoped() {
        let tree = RegionTree::from_nodes(vec![
            RegionNode::new("A", 1).child(RegionNode::new("Central", 11)),
            RegionNode::new("B", 2).child(RegionNode::new("Central", 21)),
        ])
        .unwrap();
        assert_eq!(tree.code_of(&["A", "Central"]).street, Some(11));
        assert_eq!(tree.code_of(&["B", "Central"]).street, Some(21));
    }

    #[test]
    fn duplicate_sibling_names_are_rejected() {
        let err = RegionTree::from_nodes(vec![RegionNode::new("A", 1), RegionNode::new("A", 2)])
            .unwrap_err();
        assert!(matches!(err, RegionError::DuplicateName { .. }));
    }

    #[test]
    fn four_level_trees_are_rejected() {
        let err = RegionTree::from_nodes(vec![RegionNode::new("A", 1).child(
            RegionNode::new("A1", 11)
                .child(RegionNode::new("A1a", 111).child(RegionNode::new("deep", 1111))),
        )])
        .unwrap_err();
        assert!(matches!(err, RegionError::TooDeep { .. }));
    }

    #[test]
    fn bundled_dataset_parses_and_has_three_levels() {
        let tree = RegionTree::bundled().unwrap();
        let districts = tree.children_of(&[]);
        assert!(!districts.is_empty());
        let streets = tree.children_of(&[districts[0]]);
        assert!(!streets.is_empty());
        let communities = tree.children_of(&[districts[0], streets[0]]);
        assert!(!communities.is_empty());
        assert!(
            tree.code_of(&[districts[0], streets[0], communities[0]])
                .is_complete()
        );
    }

    #[test]
    fn global_load_is_first_call_wins() {
        let first = RegionTree::load(sample());
        let second = RegionTree::load(RegionTree::from_nodes(vec![]).unwrap());
        assert!(Arc::ptr_eq(&first, &second));
        assert!(RegionTree::global().is_some());
    }
}
