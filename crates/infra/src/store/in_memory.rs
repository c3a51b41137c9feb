use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use stockroom_inventory::{InventoryItem, ItemId, ItemName, Quantity};

use super::{InventoryStore, StoreError};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, (String, i64)>,
    last_id: i64,
}

impl Table {
    fn find(&self, name: &str) -> Option<i64> {
        self.rows
            .iter()
            .find_map(|(id, (n, _))| (n == name).then_some(*id))
    }
}

/// In-memory inventory store for tests/dev.
///
/// Mirrors the SQLite contract: ids grow monotonically and are never reused,
/// listing is in id order.
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    inner: RwLock<Table>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl InventoryStore for InMemoryInventoryStore {
    async fn initialize(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn insert(&self, name: &ItemName, quantity: Quantity) -> Result<ItemId, StoreError> {
        let mut table = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if table.find(name.as_str()).is_some() {
            return Err(StoreError::DuplicateName(name.as_str().to_string()));
        }
        table.last_id += 1;
        let id = table.last_id;
        table
            .rows
            .insert(id, (name.as_str().to_string(), quantity.get()));
        Ok(ItemId(id))
    }

    async fn delete(&self, name: &ItemName) -> Result<u64, StoreError> {
        let mut table = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        match table.find(name.as_str()) {
            Some(id) => {
                table.rows.remove(&id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn update_quantity(
        &self,
        name: &ItemName,
        quantity: Quantity,
    ) -> Result<u64, StoreError> {
        let mut table = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let Some(id) = table.find(name.as_str()) else {
            return Ok(0);
        };
        if let Some(row) = table.rows.get_mut(&id) {
            row.1 = quantity.get();
        }
        Ok(1)
    }

    async fn list_all(&self) -> Result<Vec<InventoryItem>, StoreError> {
        let table = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(table
            .rows
            .iter()
            .map(|(id, (name, quantity))| InventoryItem::restore(*id, name.clone(), *quantity))
            .collect())
    }

    async fn close(&self) {}
}
