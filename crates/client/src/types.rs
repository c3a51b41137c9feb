//! Wire types as the client sees them (mirrors the API response shapes).

use serde::{Deserialize, Serialize};

/// One row of `GET /inventory`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItemView {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
}

/// Confirmation returned by `POST /add-item`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddItemResponse {
    pub message: String,
    pub name: String,
    pub quantity: i64,
}

/// Confirmation returned by `POST /remove-item` and `POST /update-quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error envelope shared by every failing route.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
