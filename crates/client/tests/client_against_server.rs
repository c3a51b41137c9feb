use std::sync::Arc;

use stockroom_api::app::services::{AppServices, DccSettings};
use stockroom_client::{ClientError, InventoryClient, InventoryItemView};
use stockroom_infra::{InMemoryInventoryStore, InventoryStore};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let store = Arc::new(InMemoryInventoryStore::new());
        store.initialize().await.unwrap();

        let app = stockroom_api::app::build_app(Arc::new(AppServices::new(
            store,
            DccSettings::default(),
        )));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn client_drives_full_lifecycle() {
    let srv = TestServer::spawn().await;
    let client = InventoryClient::new(format!("{}/", srv.base_url));

    assert!(client.health().await);

    let added = client.add_item("bolt", Some(10)).await.unwrap();
    assert_eq!(added.message, "Item added to inventory");
    assert_eq!(added.quantity, 10);

    let defaulted = client.add_item("nut", None).await.unwrap();
    assert_eq!(defaulted.quantity, 1);

    let updated = client.update_quantity("bolt", 3).await.unwrap();
    assert_eq!(updated.message, "Quantity of 'bolt' updated to 3");

    assert_eq!(
        client.list_inventory().await.unwrap(),
        vec![
            InventoryItemView { id: 1, name: "bolt".into(), quantity: 3 },
            InventoryItemView { id: 2, name: "nut".into(), quantity: 1 },
        ]
    );

    let removed = client.remove_item("bolt").await.unwrap();
    assert_eq!(removed.message, "Item 'bolt' removed from inventory");
    assert_eq!(client.list_inventory().await.unwrap().len(), 1);
}

#[tokio::test]
async fn api_errors_carry_status_and_message() {
    let srv = TestServer::spawn().await;
    let client = InventoryClient::new(srv.base_url.clone());

    client.add_item("bolt", Some(1)).await.unwrap();

    match client.add_item("bolt", Some(1)).await.unwrap_err() {
        ClientError::Api { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "Item already exists");
        }
        other => panic!("expected API error, got {other:?}"),
    }

    match client.update_quantity("ghost", 2).await.unwrap_err() {
        ClientError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Item not found");
        }
        other => panic!("expected API error, got {other:?}"),
    }

    match client.add_item("bolt", Some(0)).await.unwrap_err() {
        ClientError::Api { status, .. } => assert_eq!(status, 400),
        other => panic!("expected API error, got {other:?}"),
    }
}
