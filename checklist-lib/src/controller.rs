//! The list controller: items, selection and edit state composed into the
//! operations the presentation layer calls.

use log::{debug, trace};

use crate::edit::{BackspaceAction, EditState, EditStates, backspace_action};
use crate::error::{ChecklistError, ChecklistResult};
use crate::event::{Event, Outcome};
use crate::id::{IdGenerator, ItemId};
use crate::key::Key;
use crate::selection::SelectionSet;
use crate::store::{Item, ItemStore};
use crate::view::{ChecklistView, ItemView};

/// Editable checklist state.
///
/// Owns the [`ItemStore`], the [`SelectionSet`] and the per-item
/// [`EditStates`] and keeps them consistent: every removal goes through
/// [`remove_item`](Self::remove_item), which also unselects the item and drops
/// its edit state, so selection and edit state never reference a removed id.
///
/// All operations are total. Unknown ids and illegal selections are logged
/// and ignored; the `try_*` variants report them as [`ChecklistError`]s
/// instead.
///
/// # Example
///
/// ```
/// use checklist_lib::{Key, ListController, SequentialIds};
///
/// let mut list = ListController::with_id_generator(SequentialIds::new());
/// let id = list.add_item();
/// list.edit_item(&id, "Buy milk");
/// list.toggle_select(&id);
/// assert_eq!(list.selected_count(), 1);
///
/// list.key_pressed(&id, Key::Backspace);
/// assert!(list.items().is_empty());
/// assert_eq!(list.selected_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct ListController {
    store: ItemStore,
    selection: SelectionSet,
    edits: EditStates,
    /// Set on every observable change, cleared by [`take_dirty`](Self::take_dirty).
    dirty: bool,
}

impl ListController {
    /// Create an empty list using random ids.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list using the given id generator.
    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self {
            store: ItemStore::with_id_generator(ids),
            ..Default::default()
        }
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    /// Get all items in display order.
    pub fn items(&self) -> &[Item] {
        self.store.list()
    }

    /// Get an item by id.
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.store.get(id)
    }

    /// Get the item store.
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Get the selection.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Get the per-item edit state.
    pub fn edit_states(&self) -> &EditStates {
        &self.edits
    }

    /// Check if an item is selected.
    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selection.contains(id)
    }

    /// Get the edit state of an item.
    pub fn edit_state(&self, id: &ItemId) -> EditState {
        self.edits.get(id)
    }

    /// Number of selected items.
    pub fn selected_count(&self) -> usize {
        self.selection.count()
    }

    /// Whether bulk deletion is available.
    pub fn can_remove_selected(&self) -> bool {
        self.selected_count() > 0
    }

    /// Build the render snapshot.
    pub fn view(&self) -> ChecklistView {
        let items = self
            .store
            .list()
            .iter()
            .map(|item| ItemView {
                id: item.id().clone(),
                text: item.text.clone(),
                is_selected: self.selection.contains(item.id()),
                is_editing: self.edits.is_editing(item.id()),
                can_select: !item.is_empty(),
            })
            .collect();
        ChecklistView {
            items,
            selected_count: self.selection.count(),
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Append a new empty item at the tail.
    pub fn add_item(&mut self) -> ItemId {
        let id = self.store.add();
        debug!("Added item {}", id);
        self.dirty = true;
        id
    }

    /// Replace an item's text. Returns `false` if the item does not exist.
    pub fn edit_item(&mut self, id: &ItemId, text: impl Into<String>) -> bool {
        self.try_edit_item(id, text).map_err(log_ignored).is_ok()
    }

    /// Replace an item's text.
    pub fn try_edit_item(&mut self, id: &ItemId, text: impl Into<String>) -> ChecklistResult<()> {
        self.store.set_text(id, text)?;
        trace!("Edited item {}", id);
        self.dirty = true;
        Ok(())
    }

    /// Flip an item's selection. Returns `false` if nothing changed.
    pub fn toggle_select(&mut self, id: &ItemId) -> bool {
        self.try_toggle_select(id).map_err(log_ignored).is_ok()
    }

    /// Flip an item's selection. Returns the new membership.
    ///
    /// Unselecting always works; selecting requires non-empty text.
    pub fn try_toggle_select(&mut self, id: &ItemId) -> ChecklistResult<bool> {
        let item = self.store.get(id).ok_or_else(|| ChecklistError::not_found(id))?;
        if !self.selection.contains(id) && item.is_empty() {
            return Err(ChecklistError::empty_selection(id));
        }
        let selected = self.selection.toggle(id);
        debug!(
            "{} item {}",
            if selected { "Selected" } else { "Unselected" },
            id
        );
        self.dirty = true;
        Ok(selected)
    }

    /// Remove an item, unselect it and drop its edit state.
    ///
    /// Returns `false` if the item did not exist. Removing twice is harmless.
    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        self.try_remove_item(id).map_err(log_ignored).is_ok()
    }

    /// Remove an item, unselect it and drop its edit state.
    pub fn try_remove_item(&mut self, id: &ItemId) -> ChecklistResult<Item> {
        // Cleaned even when the store has no such item.
        self.selection.unselect(id);
        self.edits.forget(id);
        let item = self.store.remove(id).ok_or_else(|| ChecklistError::not_found(id))?;
        debug!("Removed item {}", id);
        self.dirty = true;
        Ok(item)
    }

    /// Remove every selected item, then clear the selection.
    ///
    /// Returns the removed ids in display order.
    pub fn remove_selected(&mut self) -> Vec<ItemId> {
        let removed: Vec<ItemId> = self
            .store
            .ids()
            .into_iter()
            .filter(|id| self.selection.contains(id))
            .collect();
        for id in &removed {
            self.remove_item(id);
        }
        self.selection.clear();
        if !removed.is_empty() {
            debug!("Removed {} selected items", removed.len());
        }
        removed
    }

    // -------------------------------------------------------------------------
    // Text field lifecycle
    // -------------------------------------------------------------------------

    /// An item's text field gained focus (Idle -> Editing).
    ///
    /// Returns `false` if the item does not exist or was already editing.
    pub fn focus_start(&mut self, id: &ItemId) -> bool {
        if !self.store.contains(id) {
            log_ignored(ChecklistError::not_found(id));
            return false;
        }
        if let Some(previous) = self.edits.editing().filter(|current| *current != id) {
            trace!("Item {} stopped editing", previous);
        }
        if !self.edits.focus(id) {
            return false;
        }
        trace!("Item {} editing", id);
        self.dirty = true;
        true
    }

    /// An item's text field lost focus (Editing -> Idle).
    pub fn focus_end(&mut self, id: &ItemId) -> bool {
        let changed = self.edits.blur(id);
        if changed {
            trace!("Item {} idle", id);
            self.dirty = true;
        }
        changed
    }

    /// A key was pressed in an item's text field.
    ///
    /// Backspace removes the item when [`backspace_action`] says so; every
    /// other keystroke is plain text editing and reported as ignored.
    pub fn key_pressed(&mut self, id: &ItemId, key: Key) -> Outcome {
        if key != Key::Backspace {
            return Outcome::Ignored;
        }
        let Some(item) = self.store.get(id) else {
            log_ignored(ChecklistError::not_found(id));
            return Outcome::Ignored;
        };
        match backspace_action(self.selection.contains(id), item.is_empty()) {
            BackspaceAction::Delete => {
                self.remove_item(id);
                Outcome::Removed(vec![id.clone()])
            }
            BackspaceAction::Edit => Outcome::Ignored,
        }
    }

    /// Apply one inbound event.
    pub fn handle(&mut self, event: Event) -> Outcome {
        trace!("Handling {:?}", event);
        let updated = |changed: bool| {
            if changed {
                Outcome::Updated
            } else {
                Outcome::Ignored
            }
        };
        match event {
            Event::PressAdd => Outcome::Added(self.add_item()),
            Event::PressDeleteSelected => {
                let removed = self.remove_selected();
                if removed.is_empty() {
                    Outcome::Ignored
                } else {
                    Outcome::Removed(removed)
                }
            }
            Event::PressToggleSelect { id } => updated(self.toggle_select(&id)),
            Event::FocusStart { id } => updated(self.focus_start(&id)),
            Event::FocusEnd { id } => updated(self.focus_end(&id)),
            Event::TextChanged { id, text } => updated(self.edit_item(&id, text)),
            Event::KeyPressed { id, key } => self.key_pressed(&id, key),
        }
    }
}

fn log_ignored(err: ChecklistError) {
    debug!("Ignored: {}", err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialIds;

    fn list() -> ListController {
        ListController::with_id_generator(SequentialIds::new())
    }

    fn list_with(texts: &[&str]) -> (ListController, Vec<ItemId>) {
        let mut list = list();
        let ids = texts
            .iter()
            .map(|text| {
                let id = list.add_item();
                list.edit_item(&id, *text);
                id
            })
            .collect();
        (list, ids)
    }

    #[test]
    fn test_add_has_no_side_effects() {
        let mut list = list();
        let id = list.add_item();
        assert!(!list.is_selected(&id));
        assert_eq!(list.edit_state(&id), EditState::Idle);
        assert_eq!(list.selected_count(), 0);
    }

    #[test]
    fn test_toggle_select_empty_item_is_rejected() {
        let mut list = list();
        let id = list.add_item();

        assert_eq!(
            list.try_toggle_select(&id),
            Err(ChecklistError::EmptySelection { id: id.clone() })
        );
        assert!(!list.toggle_select(&id));
        assert_eq!(list.selected_count(), 0);
    }

    #[test]
    fn test_toggle_select_twice_restores() {
        let (mut list, ids) = list_with(&["a"]);
        assert!(list.toggle_select(&ids[0]));
        assert!(list.is_selected(&ids[0]));
        assert!(list.toggle_select(&ids[0]));
        assert!(!list.is_selected(&ids[0]));
    }

    #[test]
    fn test_selected_item_can_be_unselected_after_clearing_text() {
        let (mut list, ids) = list_with(&["a"]);
        list.toggle_select(&ids[0]);
        list.edit_item(&ids[0], "");

        assert!(list.is_selected(&ids[0]));
        assert_eq!(list.try_toggle_select(&ids[0]), Ok(false));
    }

    #[test]
    fn test_remove_item_cleans_selection_and_edit_state() {
        let (mut list, ids) = list_with(&["a", "b"]);
        list.toggle_select(&ids[0]);
        list.focus_start(&ids[0]);

        assert!(list.remove_item(&ids[0]));
        assert!(!list.is_selected(&ids[0]));
        assert_eq!(list.edit_state(&ids[0]), EditState::Idle);
        assert!(list.edit_states().is_empty());
        assert_eq!(list.store().ids(), vec![ids[1].clone()]);
    }

    #[test]
    fn test_remove_selected_returns_display_order() {
        let (mut list, ids) = list_with(&["a", "b", "c"]);
        list.toggle_select(&ids[2]);
        list.toggle_select(&ids[0]);

        assert_eq!(list.remove_selected(), vec![ids[0].clone(), ids[2].clone()]);
        assert_eq!(list.store().ids(), vec![ids[1].clone()]);
        assert_eq!(list.selected_count(), 0);
    }

    #[test]
    fn test_remove_selected_with_nothing_selected() {
        let (mut list, _) = list_with(&["a"]);
        assert!(list.remove_selected().is_empty());
        assert_eq!(list.items().len(), 1);
    }

    #[test]
    fn test_focus_unknown_item_is_ignored() {
        let mut list = list();
        let ghost = ItemId::new("ghost");
        assert!(!list.focus_start(&ghost));
        assert!(list.edit_states().is_empty());
    }

    #[test]
    fn test_non_backspace_keys_are_ignored() {
        let (mut list, ids) = list_with(&[""]);
        assert_eq!(list.key_pressed(&ids[0], Key::Char('x')), Outcome::Ignored);
        assert_eq!(list.key_pressed(&ids[0], Key::Delete), Outcome::Ignored);
        assert_eq!(list.items().len(), 1);
    }

    #[test]
    fn test_backspace_on_editing_item_drops_edit_state() {
        let (mut list, ids) = list_with(&[""]);
        list.focus_start(&ids[0]);
        assert_eq!(
            list.key_pressed(&ids[0], Key::Backspace),
            Outcome::Removed(vec![ids[0].clone()])
        );
        assert!(list.edit_states().editing().is_none());
    }

    #[test]
    fn test_dirty_flag() {
        let mut list = list();
        assert!(!list.take_dirty());

        let id = list.add_item();
        assert!(list.take_dirty());
        assert!(!list.take_dirty());

        list.toggle_select(&id);
        assert!(!list.take_dirty());

        list.focus_end(&id);
        assert!(!list.take_dirty());

        assert!(list.focus_start(&id));
        assert!(list.take_dirty());
        assert!(!list.focus_start(&id));
        assert!(!list.take_dirty());
        assert_eq!(list.edit_state(&id), EditState::Editing);
    }

    #[test]
    fn test_can_remove_selected_follows_selection() {
        let (mut list, ids) = list_with(&["a", "b"]);
        assert!(!list.can_remove_selected());

        list.toggle_select(&ids[0]);
        assert!(list.can_remove_selected());

        list.remove_selected();
        assert!(!list.can_remove_selected());
    }

    #[test]
    fn test_view_rows() {
        let (mut list, ids) = list_with(&["milk", ""]);
        list.toggle_select(&ids[0]);
        list.focus_start(&ids[1]);

        let view = list.view();
        assert_eq!(view.selected_count, 1);
        assert!(view.can_delete_selected());

        let first = view.get(&ids[0]).unwrap();
        assert!(first.is_selected && first.can_select && !first.is_editing);

        let second = view.get(&ids[1]).unwrap();
        assert!(!second.is_selected && !second.can_select && second.is_editing);
    }
}
