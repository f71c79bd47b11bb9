//! Item identifiers and their generators.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, unique identifier of a checklist item.
///
/// Assigned once when the item is created and never changed afterwards.
/// String-backed so ids stay stable across renders and serialize as plain
/// JSON strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an id from a raw string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Source of fresh item ids.
///
/// Every call to [`next`](IdGenerator::next) must return an id distinct from
/// all ids previously returned by the same generator.
pub trait IdGenerator: fmt::Debug {
    /// Produce a fresh id.
    fn next(&mut self) -> ItemId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next(&mut self) -> ItemId {
        (**self).next()
    }
}

/// Random 128-bit ids (UUID v4).
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next(&mut self) -> ItemId {
        ItemId(Uuid::new_v4().to_string())
    }
}

/// Monotonic counter ids: `item-1`, `item-2`, ...
///
/// Deterministic, which makes it the generator of choice for tests and
/// scripted sessions.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    counter: u64,
}

impl SequentialIds {
    /// Create a generator starting at `item-1`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next(&mut self) -> ItemId {
        self.counter += 1;
        ItemId(format!("item-{}", self.counter))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_sequential_ids_count_up() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next().as_str(), "item-1");
        assert_eq!(ids.next().as_str(), "item-2");
        assert_eq!(ids.next().as_str(), "item-3");
    }

    #[test]
    fn test_random_ids_are_distinct() {
        let mut ids = RandomIds;
        let seen: HashSet<ItemId> = (0..1000).map(|_| ids.next()).collect();
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn test_item_id_serializes_as_string() {
        let id = ItemId::new("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }
}
