use serde::de::DeserializeOwned;

use crate::types::{AddItemResponse, ErrorBody, InventoryItemView, MessageResponse};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("parse error: {0}")]
    Decode(String),
}

/// Client for the four inventory routes plus the health check.
#[derive(Debug, Clone)]
pub struct InventoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl InventoryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check connectivity by hitting the health endpoint.
    pub async fn health(&self) -> bool {
        match self.http.get(self.url("/health")).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                tracing::debug!(error = %e, "health check failed");
                false
            }
        }
    }

    pub async fn add_item(
        &self,
        name: &str,
        quantity: Option<i64>,
    ) -> Result<AddItemResponse, ClientError> {
        let mut body = serde_json::json!({ "name": name });
        if let Some(q) = quantity {
            body["quantity"] = q.into();
        }
        self.post("/add-item", &body).await
    }

    pub async fn remove_item(&self, name: &str) -> Result<MessageResponse, ClientError> {
        self.post("/remove-item", &serde_json::json!({ "name": name }))
            .await
    }

    pub async fn update_quantity(
        &self,
        name: &str,
        quantity: i64,
    ) -> Result<MessageResponse, ClientError> {
        self.post(
            "/update-quantity",
            &serde_json::json!({ "name": name, "quantity": quantity }),
        )
        .await
    }

    pub async fn list_inventory(&self) -> Result<Vec<InventoryItemView>, ClientError> {
        let resp = self
            .http
            .get(self.url("/inventory"))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        decode(resp).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, ClientError> {
        tracing::debug!(path, %body, "sending request");
        let resp = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        decode(resp).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    let text = resp
        .text()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|b| b.error)
            .unwrap_or(text);
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&text).map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = InventoryClient::new("http://localhost:5000//");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/inventory"), "http://localhost:5000/inventory");
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        // Port 9 (discard) is essentially never served on loopback.
        let client = InventoryClient::new("http://127.0.0.1:9");
        assert!(!client.health().await);
        let err = client.list_inventory().await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
    }
}
