//! SQLite-backed inventory store.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use stockroom_inventory::{InventoryItem, ItemId, ItemName, Quantity};

use super::{InventoryStore, StoreError};
use crate::config::StoreConfig;

/// Inventory store over a `SqlitePool`.
///
/// Each call checks a connection out of the pool and returns it when the
/// statement finishes, on success and on error alike. Write serialization is
/// left to SQLite's own locking.
#[derive(Debug, Clone)]
pub struct SqliteInventoryStore {
    pool: SqlitePool,
}

impl SqliteInventoryStore {
    /// Open (creating if missing) the database described by `config`.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let options =
            SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        tracing::info!(
            database_url = %config.database_url,
            max_connections = config.max_connections,
            "connected inventory store"
        );

        Ok(Self { pool })
    }

    /// Private in-memory database (tests/dev).
    ///
    /// Pinned to a single long-lived connection: every `:memory:` connection
    /// is its own database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl InventoryStore for SqliteInventoryStore {
    async fn initialize(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS inventory (
                id       INTEGER PRIMARY KEY AUTOINCREMENT,
                name     TEXT UNIQUE NOT NULL,
                quantity INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn insert(&self, name: &ItemName, quantity: Quantity) -> Result<ItemId, StoreError> {
        let res = sqlx::query("INSERT INTO inventory (name, quantity) VALUES (?1, ?2)")
            .bind(name.as_str())
            .bind(quantity.get())
            .execute(&self.pool)
            .await;

        match res {
            Ok(done) => Ok(ItemId(done.last_insert_rowid())),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(StoreError::DuplicateName(name.as_str().to_string()))
            }
            Err(e) => Err(StoreError::Unavailable(e)),
        }
    }

    async fn delete(&self, name: &ItemName) -> Result<u64, StoreError> {
        let done = sqlx::query("DELETE FROM inventory WHERE name = ?1")
            .bind(name.as_str())
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected())
    }

    async fn update_quantity(
        &self,
        name: &ItemName,
        quantity: Quantity,
    ) -> Result<u64, StoreError> {
        let done = sqlx::query("UPDATE inventory SET quantity = ?1 WHERE name = ?2")
            .bind(quantity.get())
            .bind(name.as_str())
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected())
    }

    async fn list_all(&self) -> Result<Vec<InventoryItem>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, quantity
            FROM inventory
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| -> Result<InventoryItem, StoreError> {
                Ok(InventoryItem::restore(
                    row.try_get("id")?,
                    row.try_get("name")?,
                    row.try_get("quantity")?,
                ))
            })
            .collect()
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
