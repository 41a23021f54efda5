//! The cascading selector state machine.

use std::sync::Arc;

use hpass_region::RegionTree;
use tracing::debug;

use crate::path::{SelectionChanged, SelectionPath};
use crate::{Level, Result, SelectError};

/// One level's derived option list plus its selection.
///
/// `selected`, when set, is always a valid index into `options`; `options`
/// always mirrors the region tree's children of the current parent path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    options: Vec<String>,
    selected: Option<usize>,
}

impl OptionSet {
    fn unselected(options: Vec<String>) -> Self {
        Self {
            options,
            selected: None,
        }
    }

    /// Derived child list with the first entry auto-selected when non-empty.
    fn first_selected(options: Vec<String>) -> Self {
        let selected = if options.is_empty() { None } else { Some(0) };
        Self { options, selected }
    }

    /// Option names in display order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Selected index, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Name of the selected option, if any.
    #[must_use]
    pub fn selected_name(&self) -> Option<&str> {
        self.selected.map(|i| self.options[i].as_str())
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// True when there are no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// State controller for the three dependent region widgets.
///
/// Owns the selection path and the per-level option sets exclusively. Each
/// mutation is atomic: the bounds and ancestor checks run before any field
/// is touched, so a rejected call leaves the state byte-for-byte unchanged.
#[derive(Debug, Clone)]
pub struct CascadingSelector {
    tree: Arc<RegionTree>,
    path: SelectionPath,
    districts: OptionSet,
    streets: OptionSet,
    communities: OptionSet,
}

impl CascadingSelector {
    /// Create a selector over the shared region tree with nothing selected.
    #[must_use]
    pub fn new(tree: Arc<RegionTree>) -> Self {
        let names = tree.children_of(&[]).into_iter().map(String::from).collect();
        Self {
            tree,
            path: SelectionPath::default(),
            districts: OptionSet::unselected(names),
            streets: OptionSet::default(),
            communities: OptionSet::default(),
        }
    }

    /// Select a district by option index.
    ///
    /// Clears street and community, re-derives both child option lists, and
    /// auto-selects the first entry of each non-empty list.
    ///
    /// # Errors
    ///
    /// [`SelectError::InvalidSelection`] when `index` is out of range; state
    /// is untouched.
    pub fn select_district(&mut self, index: usize) -> Result<SelectionChanged> {
        let name = self.checked_name(Level::District, index)?;
        self.districts.selected = Some(index);
        self.path.district = Some(name);
        self.path.street = None;
        self.path.community = None;
        self.rebuild_streets();
        Ok(self.changed())
    }

    /// Select a street by option index.
    ///
    /// Clears community, re-derives its option list, and auto-selects the
    /// first entry when non-empty.
    ///
    /// # Errors
    ///
    /// [`SelectError::IncompleteAncestor`] when no district is selected,
    /// [`SelectError::InvalidSelection`] when `index` is out of range; state
    /// is untouched either way.
    pub fn select_street(&mut self, index: usize) -> Result<SelectionChanged> {
        if self.path.district.is_none() {
            return Err(SelectError::IncompleteAncestor {
                level: Level::Street,
            });
        }
        let name = self.checked_name(Level::Street, index)?;
        self.streets.selected = Some(index);
        self.path.street = Some(name);
        self.path.community = None;
        self.rebuild_communities();
        Ok(self.changed())
    }

    /// Select a community by option index. Terminal level, nothing below to
    /// recompute.
    ///
    /// # Errors
    ///
    /// [`SelectError::IncompleteAncestor`] when no street is selected,
    /// [`SelectError::InvalidSelection`] when `index` is out of range; state
    /// is untouched either way.
    pub fn select_community(&mut self, index: usize) -> Result<SelectionChanged> {
        if self.path.street.is_none() {
            return Err(SelectError::IncompleteAncestor {
                level: Level::Community,
            });
        }
        let name = self.checked_name(Level::Community, index)?;
        self.communities.selected = Some(index);
        self.path.community = Some(name);
        Ok(self.changed())
    }

    /// Clear the selection entirely ("no filter").
    ///
    /// The district option list stays (it always mirrors the tree root);
    /// street and community option sets empty out.
    pub fn reset(&mut self) -> SelectionChanged {
        self.path = SelectionPath::default();
        self.districts.selected = None;
        self.streets = OptionSet::default();
        self.communities = OptionSet::default();
        self.changed()
    }

    /// Immutable snapshot of the current selection.
    #[must_use]
    pub fn current_path(&self) -> SelectionPath {
        self.path.clone()
    }

    /// District option set.
    #[must_use]
    pub fn districts(&self) -> &OptionSet {
        &self.districts
    }

    /// Street option set, derived from the selected district.
    #[must_use]
    pub fn streets(&self) -> &OptionSet {
        &self.streets
    }

    /// Community option set, derived from the selected street.
    #[must_use]
    pub fn communities(&self) -> &OptionSet {
        &self.communities
    }

    /// Bounds-check `index` against the level's options and return the
    /// option name. Runs before any mutation.
    fn checked_name(&self, level: Level, index: usize) -> Result<String> {
        let options = match level {
            Level::District => &self.districts,
            Level::Street => &self.streets,
            Level::Community => &self.communities,
        };
        options
            .options
            .get(index)
            .cloned()
            .ok_or(SelectError::InvalidSelection {
                level,
                index,
                len: options.len(),
            })
    }

    fn rebuild_streets(&mut self) {
        let names: Vec<String> = match self.path.district.as_deref() {
            Some(district) => self
                .tree
                .children_of(&[district])
                .into_iter()
                .map(String::from)
                .collect(),
            None => Vec::new(),
        };
        self.streets = OptionSet::first_selected(names);
        self.path.street = self.streets.selected_name().map(String::from);
        self.rebuild_communities();
    }

    fn rebuild_communities(&mut self) {
        let names: Vec<String> = match (self.path.district.as_deref(), self.path.street.as_deref())
        {
            (Some(district), Some(street)) => self
                .tree
                .children_of(&[district, street])
                .into_iter()
                .map(String::from)
                .collect(),
            _ => Vec::new(),
        };
        self.communities = OptionSet::first_selected(names);
        self.path.community = self.communities.selected_name().map(String::from);
    }

    fn changed(&self) -> SelectionChanged {
        debug!(path = ?self.path, "selection changed");
        SelectionChanged::new(self.path.clone())
    }
}
