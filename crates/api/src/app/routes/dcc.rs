//! Endpoints called by the 3D-modeling add-on.
//!
//! Transform payloads are acknowledged after a simulated delay and then
//! dropped; nothing here touches the inventory store.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/transform", post(transform))
        .route("/translation", post(translation))
        .route("/rotation", post(rotation))
        .route("/scale", post(scale))
        .route("/file-path", get(file_path))
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransformKind {
    Transform,
    Translation,
    Rotation,
    Scale,
}

impl TransformKind {
    pub fn label(self) -> &'static str {
        match self {
            TransformKind::Transform => "Transform",
            TransformKind::Translation => "Translation",
            TransformKind::Rotation => "Rotation",
            TransformKind::Scale => "Scale",
        }
    }
}

pub async fn transform(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> axum::response::Response {
    receive(&services, TransformKind::Transform, body).await
}

pub async fn translation(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> axum::response::Response {
    receive(&services, TransformKind::Translation, body).await
}

pub async fn rotation(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> axum::response::Response {
    receive(&services, TransformKind::Rotation, body).await
}

pub async fn scale(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> axum::response::Response {
    receive(&services, TransformKind::Scale, body).await
}

async fn receive(
    services: &AppServices,
    kind: TransformKind,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> axum::response::Response {
    let Json(payload) = match body {
        Ok(b) => b,
        Err(rej) => {
            return errors::json_rejection_to_response(rej, "Invalid transform payload");
        }
    };

    let delay = services.dcc().transform_delay;
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    tracing::info!(kind = kind.label(), %payload, "received transform data");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": format!("{} data received", kind.label()),
        })),
    )
        .into_response()
}

pub async fn file_path(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::FilePathQuery>,
) -> axum::response::Response {
    let dcc = services.dcc();
    let path = if query.wants_project_dir() {
        dcc.project_dir.as_deref()
    } else {
        dcc.project_file.as_deref()
    };

    match path.map(Path::to_string_lossy) {
        Some(p) => (
            StatusCode::OK,
            Json(serde_json::json!({ "file_path": p })),
        )
            .into_response(),
        None => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_configured",
            "project path is not configured",
        ),
    }
}
