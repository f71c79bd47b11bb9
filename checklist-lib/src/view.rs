//! Outbound state for rendering.

use serde::Serialize;

use crate::id::ItemId;

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id: ItemId,
    pub text: String,
    pub is_selected: bool,
    pub is_editing: bool,
    /// Derived: only items with text can be selected.
    pub can_select: bool,
}

/// Snapshot of the whole list, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistView {
    pub items: Vec<ItemView>,
    pub selected_count: usize,
}

impl ChecklistView {
    /// Whether the bulk-delete control should be enabled.
    pub fn can_delete_selected(&self) -> bool {
        self.selected_count > 0
    }

    /// Get a row by id.
    pub fn get(&self, id: &ItemId) -> Option<&ItemView> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Get the id of the row at a 0-based position.
    pub fn id_at(&self, index: usize) -> Option<&ItemId> {
        self.items.get(index).map(|item| &item.id)
    }
}
