//! Resolved area codes.

use serde::{Deserialize, Serialize};

/// Numeric codes identifying a selection path, one per level.
///
/// Ephemeral: recomputed on demand by [`RegionTree::code_of`], never stored.
/// An unresolved segment is `None`, and everything below an unresolved
/// segment is `None` too — a code is never invented without a bound node.
///
/// [`RegionTree::code_of`]: crate::RegionTree::code_of
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaCode {
    pub district: Option<i64>,
    pub street: Option<i64>,
    pub community: Option<i64>,
}

impl AreaCode {
    /// True when no segment resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.district.is_none() && self.street.is_none() && self.community.is_none()
    }

    /// True when all three segments resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.district.is_some() && self.street.is_some() && self.community.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_complete_are_disjoint_for_partial_codes() {
        let partial = AreaCode {
            district: Some(1),
            street: None,
            community: None,
        };
        assert!(!partial.is_empty());
        assert!(!partial.is_complete());
    }
}
