//! Infrastructure layer: configuration and inventory persistence.

pub mod config;
pub mod store;

pub use config::{AppConfig, ConfigError, StoreConfig};
pub use store::{InMemoryInventoryStore, InventoryStore, SqliteInventoryStore, StoreError};
