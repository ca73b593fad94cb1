//! In-memory item store for the todo service.
//!
//! # Overview
//! Owns the todo items and assigns their ids. Knows nothing about HTTP: the
//! server crate translates requests into `ItemStore` calls.
//!
//! # Design
//! - One lock guards the items and the id counter together, so every
//!   operation is linearizable with respect to the others.
//! - Ids start at 0, grow by one per add and are never reused, even after
//!   the item holding them is removed.
//! - `list` returns owned copies; callers cannot reach the store's internals.
//! - The store is an ordinary value. The server builds one at startup and
//!   shares it through `Arc`; there is no process-wide global.

pub mod store;
pub mod types;

pub use store::{ItemStore, SEED_ITEMS};
pub use types::{Item, NewItem};
