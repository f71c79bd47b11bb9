//! Per-item edit state and the backspace deletion policy.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// Whether an item's text field is receiving keystrokes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditState {
    /// Not focused.
    #[default]
    Idle,
    /// Focused, text field active.
    Editing,
}

/// Edit state of every item, keyed by id.
///
/// Only non-idle entries are stored: an item without an entry is
/// [`EditState::Idle`]. At most one item is editing at a time since only one
/// text field can hold input focus.
#[derive(Debug, Clone, Default)]
pub struct EditStates {
    states: HashMap<ItemId, EditState>,
}

impl EditStates {
    /// Create an empty edit state map (everything idle).
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the edit state of an item.
    pub fn get(&self, id: &ItemId) -> EditState {
        self.states.get(id).copied().unwrap_or_default()
    }

    /// Check if an item is being edited.
    pub fn is_editing(&self, id: &ItemId) -> bool {
        self.get(id) == EditState::Editing
    }

    /// The item currently being edited, if any.
    pub fn editing(&self) -> Option<&ItemId> {
        self.states
            .iter()
            .find(|(_, state)| **state == EditState::Editing)
            .map(|(id, _)| id)
    }

    /// Number of live (non-idle) entries.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if every item is idle.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Idle -> Editing. Any other item that was editing goes idle.
    ///
    /// Returns `false` if the item was already editing.
    pub fn focus(&mut self, id: &ItemId) -> bool {
        if self.is_editing(id) {
            return false;
        }
        self.states.clear();
        self.states.insert(id.clone(), EditState::Editing);
        true
    }

    /// Editing -> Idle. Returns `true` if the item was editing.
    pub fn blur(&mut self, id: &ItemId) -> bool {
        self.states.remove(id).is_some()
    }

    /// Drop all state for an item (called when the item is removed).
    pub fn forget(&mut self, id: &ItemId) {
        self.states.remove(id);
    }
}

/// What a backspace keystroke does to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackspaceAction {
    /// Remove the item (and unselect it).
    Delete,
    /// Ordinary text editing; the list is untouched.
    Edit,
}

/// Decide what a backspace does to an item.
///
/// | selected | text empty | action |
/// |----------|------------|--------|
/// | no       | yes        | Delete |
/// | yes      | any        | Delete |
/// | no       | no         | Edit   |
///
/// A selected item counts as marked for deletion, so backspace removes it
/// even when it still has text.
pub fn backspace_action(is_selected: bool, is_text_empty: bool) -> BackspaceAction {
    if is_selected || is_text_empty {
        BackspaceAction::Delete
    } else {
        BackspaceAction::Edit
    }
}
