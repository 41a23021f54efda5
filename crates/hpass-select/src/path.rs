//! Selection path snapshots and change events.

/// The current selection, 0–3 levels deep.
///
/// Gap-free by construction: `street` is only ever set under a set
/// `district`, `community` only under a set `street`. Empty denotes "no
/// filter" and maps to the unscoped listing query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPath {
    pub(crate) district: Option<String>,
    pub(crate) street: Option<String>,
    pub(crate) community: Option<String>,
}

impl SelectionPath {
    /// Selected district name, if any.
    #[must_use]
    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    /// Selected street name, if any.
    #[must_use]
    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    /// Selected community name, if any.
    #[must_use]
    pub fn community(&self) -> Option<&str> {
        self.community.as_deref()
    }

    /// True when nothing is selected at any level.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.district.is_none()
    }

    /// The selected names from the top down, stopping at the first unset
    /// level. Suitable for [`RegionTree::code_of`].
    ///
    /// [`RegionTree::code_of`]: hpass_region::RegionTree::code_of
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        [&self.district, &self.street, &self.community]
            .into_iter()
            .map_while(|level| level.as_deref())
            .collect()
    }
}

/// Event emitted once per successful selector mutation.
///
/// Carries the complete new path; this is the only hook downstream
/// consumers (the query dispatcher) observe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    path: SelectionPath,
}

impl SelectionChanged {
    pub(crate) fn new(path: SelectionPath) -> Self {
        Self { path }
    }

    /// The selection after the mutation.
    #[must_use]
    pub fn path(&self) -> &SelectionPath {
        &self.path
    }

    /// Consume the event, keeping the path.
    #[must_use]
    pub fn into_path(self) -> SelectionPath {
        self.path
    }
}
