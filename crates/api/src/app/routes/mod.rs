use axum::{routing::get, Router};

pub mod dcc;
pub mod inventory;
pub mod system;

/// Router for every endpoint the server exposes.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .merge(inventory::router())
        .merge(dcc::router())
}
