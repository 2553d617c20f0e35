use std::collections::HashSet;

/// The set of ingredient ids the user currently has on hand.
///
/// Ids are not validated against a catalog here; callers only toggle ids
/// they obtained from the current catalog. The set starts empty and is
/// cleared whenever a new catalog is installed, so it never carries ids
/// from a replaced catalog.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    selected: HashSet<u32>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the id if absent, removes it if present.
    ///
    /// Returns whether the id is selected after the call; two toggles of
    /// the same id restore the prior state.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.selected.contains(&id)
    }

    /// Empties the selection. Used when a catalog is replaced.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Snapshot of the selected ids, for matching.
    pub fn ids(&self) -> &HashSet<u32> {
        &self.selected
    }
}
