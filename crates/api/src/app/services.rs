//! Inventory service: validated commands in, one store call each, outcomes out.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use stockroom_core::DomainError;
use stockroom_infra::{AppConfig, InventoryStore, StoreError};
use stockroom_inventory::{InventoryCommand, InventoryItem, ItemId, ItemName, Quantity};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("item already exists: {0}")]
    DuplicateName(String),

    #[error("item not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::DuplicateName(name) => ServiceError::DuplicateName(name),
            other => ServiceError::Store(other),
        }
    }
}

/// Effect of a successfully dispatched command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Added {
        id: ItemId,
        name: ItemName,
        quantity: Quantity,
    },
    /// `existed` is false when the name was already absent (idempotent no-op).
    Removed { name: ItemName, existed: bool },
    Updated { name: ItemName, quantity: Quantity },
}

/// Settings for the endpoints called by the 3D-modeling add-on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DccSettings {
    pub transform_delay: Duration,
    pub project_file: Option<PathBuf>,
    pub project_dir: Option<PathBuf>,
}

impl From<&AppConfig> for DccSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            transform_delay: config.transform_delay,
            project_file: config.project_file.clone(),
            project_dir: config.project_dir.clone(),
        }
    }
}

/// Shared request-handling state: the injected store plus add-on settings.
pub struct AppServices {
    store: Arc<dyn InventoryStore>,
    dcc: DccSettings,
}

impl AppServices {
    pub fn new(store: Arc<dyn InventoryStore>, dcc: DccSettings) -> Self {
        Self { store, dcc }
    }

    pub fn dcc(&self) -> &DccSettings {
        &self.dcc
    }

    /// Execute one inventory command as a single store statement.
    pub async fn dispatch(&self, cmd: InventoryCommand) -> Result<CommandOutcome, ServiceError> {
        let command_type = cmd.command_type();

        let outcome = match cmd {
            InventoryCommand::AddItem(c) => {
                let id = self.store.insert(&c.name, c.quantity).await?;
                CommandOutcome::Added {
                    id,
                    name: c.name,
                    quantity: c.quantity,
                }
            }
            InventoryCommand::RemoveItem(c) => {
                let affected = self.store.delete(&c.name).await?;
                CommandOutcome::Removed {
                    name: c.name,
                    existed: affected > 0,
                }
            }
            InventoryCommand::UpdateQuantity(c) => {
                let affected = self.store.update_quantity(&c.name, c.quantity).await?;
                if affected == 0 {
                    return Err(ServiceError::NotFound(c.name.into_inner()));
                }
                CommandOutcome::Updated {
                    name: c.name,
                    quantity: c.quantity,
                }
            }
        };

        tracing::info!(command_type, outcome = ?outcome, "command applied");
        Ok(outcome)
    }

    pub async fn list_inventory(&self) -> Result<Vec<InventoryItem>, ServiceError> {
        Ok(self.store.list_all().await?)
    }
}
