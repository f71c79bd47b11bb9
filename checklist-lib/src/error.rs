//! Error types

use crate::id::ItemId;

/// Error type for checklist operations.
///
/// The controller's event API never surfaces these to the user: not-found and
/// illegal-selection conditions degrade to no-ops there. They are returned by
/// [`ItemStore`](crate::ItemStore) and by the controller's `try_*` methods for
/// callers that want to know why nothing happened.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChecklistError {
    /// No item with this id exists (it may have been removed a moment earlier).
    #[error("Item '{id}' not found")]
    NotFound { id: ItemId },

    /// Items with empty text cannot be selected.
    #[error("Item '{id}' has empty text and cannot be selected")]
    EmptySelection { id: ItemId },
}

impl ChecklistError {
    /// Creates a new not-found error.
    pub fn not_found(id: &ItemId) -> Self {
        Self::NotFound { id: id.clone() }
    }

    /// Creates a new illegal-selection error.
    pub fn empty_selection(id: &ItemId) -> Self {
        Self::EmptySelection { id: id.clone() }
    }
}

/// Result alias for checklist operations.
pub type ChecklistResult<T> = Result<T, ChecklistError>;
