//! Lock-guarded in-memory collection of todo items.
//!
//! # Design
//! `items` and `next_id` live together behind one `RwLock`, so id assignment
//! and insertion happen as a single step. Mutations take the write side;
//! `list` and `count` take the read side and may overlap each other.
//!
//! `list` copies the items out. Callers never hold a reference into the
//! store, so nothing they do with a snapshot can affect later operations.
//!
//! Critical sections never call out of the store and cannot panic halfway
//! through an update, so a poisoned lock still guards consistent data and is
//! recovered instead of surfaced as an error.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::types::{Item, NewItem};

/// Titles and bodies of the items a freshly started service holds.
pub const SEED_ITEMS: [(&str, &str); 3] = [
    ("Title 1", "Body 1"),
    ("Title 2", "Body 2"),
    ("Title 3", "Body 3"),
];

#[derive(Debug, Default)]
struct Inner {
    items: Vec<Item>,
    next_id: u64,
}

/// The exclusive owner of all todo items.
#[derive(Debug, Default)]
pub struct ItemStore {
    inner: RwLock<Inner>,
}

impl ItemStore {
    /// Creates an empty store whose first item will get id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding [`SEED_ITEMS`] at ids 0, 1 and 2.
    pub fn seeded() -> Self {
        let store = Self::new();
        for (title, body) in SEED_ITEMS {
            store.add(NewItem::new(title, body));
        }
        store
    }

    /// Assigns the next id to `new`, appends it and returns the stored item.
    pub fn add(&self, new: NewItem) -> Item {
        let mut inner = self.write();
        let id = inner.next_id;
        inner.next_id += 1;
        let item = new.into_item(id);
        inner.items.push(item.clone());
        debug!(id, count = inner.items.len(), "item added");
        item
    }

    /// Returns a copy of every item in insertion order.
    pub fn list(&self) -> Vec<Item> {
        self.read().items.clone()
    }

    /// Removes the item with `id`. Returns `false` when no such item exists.
    pub fn remove(&self, id: u64) -> bool {
        let mut inner = self.write();
        match inner.items.iter().position(|item| item.id == id) {
            Some(idx) => {
                inner.items.remove(idx);
                debug!(id, count = inner.items.len(), "item removed");
                true
            }
            None => false,
        }
    }

    pub fn count(&self) -> usize {
        self.read().items.len()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
