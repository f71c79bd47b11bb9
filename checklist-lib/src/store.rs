//! Ordered item storage.

use serde::Serialize;

use crate::error::{ChecklistError, ChecklistResult};
use crate::id::{IdGenerator, ItemId, RandomIds};

/// A single checklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Unique identifier, immutable for the item's lifetime.
    id: ItemId,
    /// Item text content (may be empty).
    pub text: String,
}

impl Item {
    fn new(id: ItemId) -> Self {
        Self {
            id,
            text: String::new(),
        }
    }

    /// Get the item id.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Check if the item text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Insertion-ordered collection of items.
///
/// New items are always appended at the tail and removal preserves the
/// relative order of the remaining items. Ids are pairwise distinct because
/// every item gets a fresh id from the store's generator.
///
/// The store knows nothing about selection or edit state; keeping those
/// consistent on removal is [`ListController`](crate::ListController)'s job.
#[derive(Debug)]
pub struct ItemStore {
    items: Vec<Item>,
    ids: Box<dyn IdGenerator>,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    /// Create an empty store using random ids.
    pub fn new() -> Self {
        Self::with_id_generator(RandomIds)
    }

    /// Create an empty store using the given id generator.
    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self {
            items: Vec::new(),
            ids: Box::new(ids),
        }
    }

    // -------------------------------------------------------------------------
    // Item access
    // -------------------------------------------------------------------------

    /// Get all items in display order.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by id.
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Check if an item with this id exists.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Get all ids in display order.
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }

    // -------------------------------------------------------------------------
    // Item mutation
    // -------------------------------------------------------------------------

    /// Append a new empty item at the tail and return its id.
    pub fn add(&mut self) -> ItemId {
        let id = self.ids.next();
        self.items.push(Item::new(id.clone()));
        id
    }

    /// Replace the text of an item.
    pub fn set_text(&mut self, id: &ItemId, text: impl Into<String>) -> ChecklistResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| ChecklistError::not_found(id))?;
        item.text = text.into();
        Ok(())
    }

    /// Remove an item by id.
    ///
    /// Returns the removed item, or `None` if no such item exists. Removing
    /// the same id twice is harmless.
    pub fn remove(&mut self, id: &ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| &item.id == id)?;
        Some(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialIds;

    fn store() -> ItemStore {
        ItemStore::with_id_generator(SequentialIds::new())
    }

    #[test]
    fn test_add_appends_empty_items() {
        let mut store = store();
        let a = store.add();
        let b = store.add();

        assert_eq!(store.len(), 2);
        assert_eq!(store.ids(), vec![a, b]);
        assert!(store.list().iter().all(Item::is_empty));
    }

    #[test]
    fn test_set_text() {
        let mut store = store();
        let id = store.add();
        store.set_text(&id, "Buy milk").unwrap();
        assert_eq!(store.get(&id).unwrap().text, "Buy milk");
    }

    #[test]
    fn test_set_text_unknown_id() {
        let mut store = store();
        let missing = ItemId::new("nope");
        assert_eq!(
            store.set_text(&missing, "x"),
            Err(ChecklistError::NotFound { id: missing })
        );
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = store();
        let a = store.add();
        let b = store.add();
        let c = store.add();

        let removed = store.remove(&b).unwrap();
        assert_eq!(removed.id(), &b);
        assert_eq!(store.ids(), vec![a, c]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = store();
        let a = store.add();
        assert!(store.remove(&a).is_some());
        assert!(store.remove(&a).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_new_items_go_to_tail_after_removal() {
        let mut store = store();
        let a = store.add();
        let b = store.add();
        store.remove(&a);
        let c = store.add();
        assert_eq!(store.ids(), vec![b, c]);
    }
}
