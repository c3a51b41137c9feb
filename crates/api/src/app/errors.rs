use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::DomainError;

use crate::app::services::ServiceError;

pub const ITEM_EXISTS: &str = "Item already exists";
pub const ITEM_NOT_FOUND: &str = "Item not found";
pub const STORE_UNAVAILABLE: &str = "Inventory store unavailable";

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Validation(DomainError::Validation(msg)) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        ServiceError::DuplicateName(_) => {
            json_error(StatusCode::CONFLICT, "conflict", ITEM_EXISTS)
        }
        ServiceError::NotFound(_) => {
            json_error(StatusCode::NOT_FOUND, "not_found", ITEM_NOT_FOUND)
        }
        ServiceError::Store(e) => {
            tracing::error!(error = %e, "inventory store call failed");
            json_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "store_unavailable",
                STORE_UNAVAILABLE,
            )
        }
    }
}

/// Unparseable or mistyped JSON bodies are validation failures, reported with
/// the route's own message.
pub fn json_rejection_to_response(
    rejection: JsonRejection,
    message: &'static str,
) -> axum::response::Response {
    tracing::debug!(rejection = %rejection.body_text(), "rejected request body");
    json_error(StatusCode::BAD_REQUEST, "validation_error", message)
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
            "code": code,
        })),
    )
        .into_response()
}
