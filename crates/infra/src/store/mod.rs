//! Inventory persistence boundary.
//!
//! The store owns the `inventory` table: a durable mapping from item name to
//! `(id, quantity)`. Every method is one statement and its own atomic unit;
//! nothing spans calls.

use stockroom_inventory::{InventoryItem, ItemId, ItemName, Quantity};
use thiserror::Error;

pub mod in_memory;
pub mod sqlite;

pub use in_memory::InMemoryInventoryStore;
pub use sqlite::SqliteInventoryStore;
pub use sqlx::Error as SqlxError;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Insert hit the unique constraint on `name`; nothing was written.
    #[error("item already exists: {0}")]
    DuplicateName(String),

    /// The persistence engine failed (unreachable, locked, corrupt).
    #[error("store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

/// Persistent table of named items with non-negative quantities.
#[async_trait::async_trait]
pub trait InventoryStore: Send + Sync {
    /// Create the backing table if absent. Safe to call on every start.
    async fn initialize(&self) -> Result<(), StoreError>;

    /// Insert a new row and return its assigned id.
    async fn insert(&self, name: &ItemName, quantity: Quantity) -> Result<ItemId, StoreError>;

    /// Delete the row named `name`; returns the affected row count (0 if absent).
    async fn delete(&self, name: &ItemName) -> Result<u64, StoreError>;

    /// Overwrite the quantity of `name`; returns the affected row count (0 if absent).
    async fn update_quantity(&self, name: &ItemName, quantity: Quantity)
    -> Result<u64, StoreError>;

    /// Every row in id order.
    async fn list_all(&self) -> Result<Vec<InventoryItem>, StoreError>;

    /// Release pooled resources. Idempotent.
    async fn close(&self);
}
