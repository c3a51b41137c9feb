use serde::Deserialize;

use crate::app::services::CommandOutcome;

// -------------------------
// Request DTOs
// -------------------------
//
// Fields are optional so that presence is checked by domain validation and
// reported with the route's own message rather than a serde error.

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub name: Option<String>,
    pub quantity: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct RemoveItemRequest {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub name: Option<String>,
    pub quantity: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct FilePathQuery {
    pub projectpath: Option<String>,
}

impl FilePathQuery {
    pub fn wants_project_dir(&self) -> bool {
        self.projectpath
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn outcome_to_json(outcome: &CommandOutcome) -> serde_json::Value {
    match outcome {
        CommandOutcome::Added { name, quantity, .. } => serde_json::json!({
            "message": "Item added to inventory",
            "name": name,
            "quantity": quantity,
        }),
        CommandOutcome::Removed { name, .. } => serde_json::json!({
            "message": format!("Item '{name}' removed from inventory"),
        }),
        CommandOutcome::Updated { name, quantity } => serde_json::json!({
            "message": format!("Quantity of '{name}' updated to {quantity}"),
        }),
    }
}
