//! RemoteClient — network client for a running Edgeline server
//!
//! Connects via HTTP to the Edgeline HTTP API.

use async_trait::async_trait;
use edgeline::{Edge, GraphSnapshot, Node};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::GraphClient;
use crate::error::{SdkError, SdkResult};
use crate::models::{ErrorBody, ServerStatus};

/// Network client that connects to a running Edgeline server.
pub struct RemoteClient {
    http_base_url: String,
    http_client: Client,
}

impl RemoteClient {
    /// Create a new RemoteClient connecting to the given HTTP base URL.
    ///
    /// # Example
    /// ```no_run
    /// # use edgeline_sdk::RemoteClient;
    /// let client = RemoteClient::new("http://localhost:8080");
    /// ```
    pub fn new(http_base_url: &str) -> Self {
        Self {
            http_base_url: http_base_url.trim_end_matches('/').to_string(),
            http_client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.http_base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.http_base_url, path)
    }

    /// `/node/get?id=...` with the id percent-encoded
    fn node_url(&self, id: &str) -> SdkResult<Url> {
        Url::parse_with_params(&self.url("/node/get"), &[("id", id)])
            .map_err(|e| SdkError::InvalidUrl(format!("{}: {}", self.http_base_url, e)))
    }

    fn health_status(body: &Value) -> SdkResult<String> {
        body.get("status")
            .and_then(Value::as_str)
            .map(String::from)
            .ok_or_else(|| SdkError::InvalidResponse(format!("health body without status: {}", body)))
    }

    async fn post_json<T: DeserializeOwned>(&self, path: &str, body: &Value) -> SdkResult<T> {
        let response = self.http_client.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> SdkResult<T> {
        let response = self.http_client.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> SdkResult<T> {
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Turn a non-success response into a typed error using the `kind` tag
    async fn error_from(response: Response) -> SdkError {
        let status = response.status();
        let body = response.json::<ErrorBody>().await.ok();
        let message = body
            .as_ref()
            .map(|b| b.error.clone())
            .unwrap_or_else(|| "Unknown error".to_string());

        match body.and_then(|b| b.kind).as_deref() {
            Some("validation") => SdkError::Validation(message),
            Some("referential") => SdkError::Referential(message),
            _ => SdkError::Server {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl GraphClient for RemoteClient {
    async fn add_node(&self, node: Node) -> SdkResult<()> {
        let body = serde_json::to_value(&node)?;
        let _: Value = self.post_json("/node", &body).await?;
        Ok(())
    }

    async fn add_edge(&self, edge: Edge) -> SdkResult<()> {
        let body = serde_json::to_value(&edge)?;
        let _: Value = self.post_json("/edge", &body).await?;
        Ok(())
    }

    async fn get_node(&self, id: &str) -> SdkResult<Option<Node>> {
        let url = self.node_url(id)?;
        let response = self.http_client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::decode(response).await.map(Some)
    }

    async fn export(&self) -> SdkResult<GraphSnapshot> {
        self.get_json("/export").await
    }

    async fn clear(&self) -> SdkResult<()> {
        let _: Value = self.post_json("/clear", &Value::Null).await?;
        Ok(())
    }

    async fn health(&self) -> SdkResult<String> {
        let body: Value = self.get_json("/health").await?;
        Self::health_status(&body)
    }

    async fn status(&self) -> SdkResult<ServerStatus> {
        self.get_json("/status").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = RemoteClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/export"), "http://localhost:8080/export");
    }

    #[test]
    fn test_node_url_encodes_id() {
        let client = RemoteClient::new("http://localhost:8080");
        let url = client.node_url("a b&c").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/node/get?id=a+b%26c");
    }

    #[test]
    fn test_unparsable_base_url_is_invalid_url() {
        let client = RemoteClient::new("not a url");
        assert!(matches!(client.node_url("a"), Err(SdkError::InvalidUrl(_))));
    }

    #[test]
    fn test_health_body_shape() {
        let ok = serde_json::json!({ "status": "healthy" });
        assert_eq!(RemoteClient::health_status(&ok).unwrap(), "healthy");

        let malformed = serde_json::json!({ "state": "up" });
        assert!(matches!(
            RemoteClient::health_status(&malformed),
            Err(SdkError::InvalidResponse(_))
        ));
    }
}
