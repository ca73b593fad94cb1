//! Domain types for the todo service.
//!
//! # Design
//! `Item` is what the store hands out and what the HTTP layer serializes.
//! `NewItem` is the input to `ItemStore::add`: it has no `id` because the
//! store assigns one. Both use owned `String` fields so snapshots returned by
//! the store never borrow from its internal state.

use serde::{Deserialize, Serialize};

/// A single stored todo entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// Payload for creating a new item. Missing fields decode as empty strings
/// and any `id` sent by the client is ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct NewItem {
    #[serde(default, alias = "Title")]
    pub title: String,
    #[serde(default, alias = "Body")]
    pub body: String,
}

impl NewItem {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub(crate) fn into_item(self, id: u64) -> Item {
        Item {
            id,
            title: self.title,
            body: self.body,
        }
    }
}
