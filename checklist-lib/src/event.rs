//! Inbound events from the presentation layer.

use serde::{Deserialize, Serialize};

use crate::id::ItemId;
use crate::key::Key;

/// A raw input event forwarded by the presentation layer.
///
/// Events are applied one at a time, in arrival order, by
/// [`ListController::handle`](crate::ListController::handle).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    /// An item's text field gained focus.
    FocusStart { id: ItemId },
    /// An item's text field lost focus.
    FocusEnd { id: ItemId },
    /// An item's text field reported new content.
    TextChanged { id: ItemId, text: String },
    /// A key was pressed while an item's text field had focus.
    KeyPressed { id: ItemId, key: Key },
    /// The "add item" control was pressed.
    PressAdd,
    /// The "delete selected" control was pressed.
    PressDeleteSelected,
    /// An item's select control was pressed.
    PressToggleSelect { id: ItemId },
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new item was appended.
    Added(ItemId),
    /// These items were removed.
    Removed(Vec<ItemId>),
    /// Item text or selection/edit state changed.
    Updated,
    /// Nothing changed (unknown id, illegal selection, plain keystroke, ...).
    Ignored,
}
