use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde_json::json;

use stockroom_api::app::services::{AppServices, DccSettings};
use stockroom_infra::{InventoryStore, SqliteInventoryStore};

struct TestServer {
    base_url: String,
    store: Arc<SqliteInventoryStore>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        Self::spawn_with(DccSettings {
            transform_delay: Duration::ZERO,
            project_file: Some(PathBuf::from("/srv/scenes/plugin.blend")),
            project_dir: Some(PathBuf::from("/srv/scenes")),
        })
        .await
    }

    async fn spawn_with(dcc: DccSettings) -> Self {
        let store = Arc::new(SqliteInventoryStore::in_memory().await.unwrap());
        store.initialize().await.unwrap();

        // Same router as prod, bound to an ephemeral port.
        let app = stockroom_api::app::build_app(Arc::new(AppServices::new(store.clone(), dcc)));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            store,
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn post(
    client: &reqwest::Client,
    srv: &TestServer,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let res = client.post(srv.url(path)).json(&body).send().await.unwrap();
    let status = res.status();
    (status, res.json().await.unwrap())
}

async fn inventory(client: &reqwest::Client, srv: &TestServer) -> serde_json::Value {
    let res = client.get(srv.url("/inventory")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

#[tokio::test]
async fn inventory_lifecycle_add_update_remove() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (status, body) = post(
        &client,
        &srv,
        "/add-item",
        json!({ "name": "bolt", "quantity": 10 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": "Item added to inventory", "name": "bolt", "quantity": 10 })
    );

    assert_eq!(
        inventory(&client, &srv).await,
        json!([{ "id": 1, "name": "bolt", "quantity": 10 }])
    );

    let (status, body) = post(
        &client,
        &srv,
        "/update-quantity",
        json!({ "name": "bolt", "quantity": 3 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Quantity of 'bolt' updated to 3");

    assert_eq!(
        inventory(&client, &srv).await,
        json!([{ "id": 1, "name": "bolt", "quantity": 3 }])
    );

    let (status, body) = post(&client, &srv, "/remove-item", json!({ "name": "bolt" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Item 'bolt' removed from inventory");

    assert_eq!(inventory(&client, &srv).await, json!([]));
}

#[tokio::test]
async fn add_item_defaults_quantity_to_one() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (status, body) = post(&client, &srv, "/add-item", json!({ "name": "washer" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantity"], 1);
}

#[tokio::test]
async fn invalid_add_is_rejected_without_writing() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for body in [
        json!({ "name": "bolt", "quantity": 0 }),
        json!({ "quantity": 5 }),
        json!({ "name": "", "quantity": 5 }),
        json!({ "name": "bolt", "quantity": "ten" }),
    ] {
        let (status, res) = post(&client, &srv, "/add-item", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(res["error"], "Invalid data. Name and positive quantity required");
        assert_eq!(res["code"], "validation_error");
    }

    assert_eq!(inventory(&client, &srv).await, json!([]));
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/update-quantity"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Please provide valid item name and quantity");
}

#[tokio::test]
async fn duplicate_name_is_a_conflict_and_keeps_first_row() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    post(&client, &srv, "/add-item", json!({ "name": "widget", "quantity": 2 })).await;
    let (status, body) = post(
        &client,
        &srv,
        "/add-item",
        json!({ "name": "widget", "quantity": 8 }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Item already exists");

    assert_eq!(
        inventory(&client, &srv).await,
        json!([{ "id": 1, "name": "widget", "quantity": 2 }])
    );
}

#[tokio::test]
async fn update_of_missing_item_is_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    post(&client, &srv, "/add-item", json!({ "name": "widget", "quantity": 2 })).await;
    let (status, body) = post(
        &client,
        &srv,
        "/update-quantity",
        json!({ "name": "gadget", "quantity": 5 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Item not found");

    let (status, _) = post(
        &client,
        &srv,
        "/update-quantity",
        json!({ "name": "widget", "quantity": -1 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(&client, &srv, "/update-quantity", json!({ "name": "widget" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(
        inventory(&client, &srv).await,
        json!([{ "id": 1, "name": "widget", "quantity": 2 }])
    );
}

#[tokio::test]
async fn remove_is_idempotent_and_ids_are_not_reused() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    post(&client, &srv, "/add-item", json!({ "name": "widget", "quantity": 2 })).await;

    for _ in 0..2 {
        let (status, _) = post(&client, &srv, "/remove-item", json!({ "name": "widget" })).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = post(&client, &srv, "/remove-item", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please provide item name");

    post(&client, &srv, "/add-item", json!({ "name": "gadget", "quantity": 1 })).await;
    let items = inventory(&client, &srv).await;
    assert_eq!(items[0]["id"], 2);
}

#[tokio::test]
async fn store_failure_is_service_unavailable() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    srv.store.close().await;

    let res = client.get(srv.url("/inventory")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["code"], "store_unavailable");
}

#[tokio::test]
async fn health_and_request_id() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(srv.url("/health"))
        .header("x-request-id", "trace-42")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["x-request-id"], "trace-42");

    let res = client.get(srv.url("/health")).send().await.unwrap();
    let generated = res.headers()["x-request-id"].to_str().unwrap().to_string();
    assert!(!generated.is_empty());
}

#[tokio::test]
async fn transform_endpoints_acknowledge_and_discard() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let payload = json!({
        "name": "Cube",
        "location": [0.0, 1.0, 2.0],
        "rotation": [0.0, 0.0, 0.0],
        "scale": [1.0, 1.0, 1.0],
    });

    for (path, label) in [
        ("/transform", "Transform"),
        ("/translation", "Translation"),
        ("/rotation", "Rotation"),
        ("/scale", "Scale"),
    ] {
        let (status, body) = post(&client, &srv, path, payload.clone()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], format!("{label} data received"));
    }

    assert_eq!(inventory(&client, &srv).await, json!([]));
}

#[tokio::test]
async fn file_path_serves_configured_locations() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .get(srv.url("/file-path"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["file_path"], "/srv/scenes/plugin.blend");

    let body: serde_json::Value = client
        .get(srv.url("/file-path?projectpath=True"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["file_path"], "/srv/scenes");
}

#[tokio::test]
async fn file_path_without_configuration_is_not_found() {
    let srv = TestServer::spawn_with(DccSettings::default()).await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/file-path")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn whitespace_only_name_is_a_valid_name() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (status, body) = post(
        &client,
        &srv,
        "/add-item",
        json!({ "name": "  ", "quantity": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "  ");

    let (status, _) = post(&client, &srv, "/remove-item", json!({ "name": "  " })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(inventory(&client, &srv).await, json!([]));
}
