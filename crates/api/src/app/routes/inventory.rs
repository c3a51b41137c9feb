use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use stockroom_inventory::item::{ADD_ITEM_INVALID, REMOVE_ITEM_INVALID, UPDATE_QUANTITY_INVALID};
use stockroom_inventory::{AddItem, InventoryCommand, RemoveItem, UpdateQuantity};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/add-item", post(add_item))
        .route("/remove-item", post(remove_item))
        .route("/update-quantity", post(update_quantity))
        .route("/inventory", get(list_inventory))
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::AddItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rej) => return errors::json_rejection_to_response(rej, ADD_ITEM_INVALID),
    };

    let cmd = match AddItem::validate(body.name, body.quantity) {
        Ok(c) => c,
        Err(e) => return errors::service_error_to_response(e.into()),
    };

    dispatch(&services, cmd.into()).await
}

pub async fn remove_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::RemoveItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rej) => return errors::json_rejection_to_response(rej, REMOVE_ITEM_INVALID),
    };

    let cmd = match RemoveItem::validate(body.name) {
        Ok(c) => c,
        Err(e) => return errors::service_error_to_response(e.into()),
    };

    dispatch(&services, cmd.into()).await
}

pub async fn update_quantity(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::UpdateQuantityRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rej) => return errors::json_rejection_to_response(rej, UPDATE_QUANTITY_INVALID),
    };

    let cmd = match UpdateQuantity::validate(body.name, body.quantity) {
        Ok(c) => c,
        Err(e) => return errors::service_error_to_response(e.into()),
    };

    dispatch(&services, cmd.into()).await
}

pub async fn list_inventory(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.list_inventory().await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

async fn dispatch(services: &AppServices, cmd: InventoryCommand) -> axum::response::Response {
    match services.dispatch(cmd).await {
        Ok(outcome) => (StatusCode::OK, Json(dto::outcome_to_json(&outcome))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
