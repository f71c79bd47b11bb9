//! Selection state management.
//!
//! Selection tracks items by id, so it stays valid while other items are
//! added or removed around the selected ones.

use std::collections::HashSet;

use crate::id::ItemId;

/// Set of currently selected item ids.
///
/// Holds ids only, never items. The caller keeps it a subset of the store:
/// only items with non-empty text are selected, and removed items are
/// unselected.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    selected: HashSet<ItemId>,
}

impl SelectionSet {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected ids (sorted for deterministic ordering).
    pub fn ids(&self) -> Vec<ItemId> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Check if an id is selected.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.selected.contains(id)
    }

    /// Get the number of selected items.
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Add an id. Returns `true` if it was not selected before.
    pub fn select(&mut self, id: &ItemId) -> bool {
        self.selected.insert(id.clone())
    }

    /// Remove an id. Returns `true` if it was selected.
    pub fn unselect(&mut self, id: &ItemId) -> bool {
        self.selected.remove(id)
    }

    /// Flip membership of an id. Returns the new membership.
    pub fn toggle(&mut self, id: &ItemId) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.clone());
            true
        }
    }

    /// Clear all selection.
    /// Returns the ids that were deselected.
    pub fn clear(&mut self) -> Vec<ItemId> {
        self.selected.drain().collect()
    }
}
