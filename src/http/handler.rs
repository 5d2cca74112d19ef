//! HTTP handlers mapping routes onto store operations

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crate::graph::{Edge, ErrorKind, GraphError, GraphSnapshot, GraphStore, Node};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// Shared state handed to every handler
pub type AppState = Arc<GraphStore>;

/// Handler failure, rendered as `{"error": "...", "kind": "..."}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Empty required identifier
    Validation(String),
    /// Edge endpoint does not exist
    Referential(String),
    /// Undecodable request
    BadRequest(String),
    NotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Referential(_) | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Stable machine-readable tag for the failure
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation",
            ApiError::Referential(_) => "referential",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::NotFound(_) => "not_found",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation(msg)
            | ApiError::Referential(msg)
            | ApiError::BadRequest(msg)
            | ApiError::NotFound(msg) => msg,
        }
    }
}

impl From<GraphError> for ApiError {
    fn from(e: GraphError) -> Self {
        match e.kind() {
            ErrorKind::Validation => ApiError::Validation(e.to_string()),
            ErrorKind::Referential => ApiError::Referential(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("Invalid JSON: {}", e))
    }
}

/// Decode a request body as JSON regardless of its `Content-Type`
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.message(), "kind": self.kind() });
        (self.status(), Json(body)).into_response()
    }
}

/// Query string for node lookups
#[derive(Debug, Deserialize)]
pub struct NodeQuery {
    #[serde(default)]
    pub id: String,
}

/// Handler for creating or replacing a node
pub async fn add_node_handler(
    State(store): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let node: Node = decode_body(&body)?;
    let id = node.id.clone();

    store.add_node(node).map_err(|e| {
        debug!("rejected node: {}", e);
        e
    })?;

    Ok(Json(json!({ "status": "ok", "id": id })))
}

/// Handler for appending an edge
pub async fn add_edge_handler(
    State(store): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let edge: Edge = decode_body(&body)?;

    store.add_edge(edge).map_err(|e| {
        debug!("rejected edge: {}", e);
        e
    })?;

    Ok(Json(json!({ "status": "ok" })))
}

/// Handler for node lookup by `?id=`
pub async fn get_node_handler(
    State(store): State<AppState>,
    Query(params): Query<NodeQuery>,
) -> Result<Json<Node>, ApiError> {
    if params.id.is_empty() {
        return Err(ApiError::BadRequest("Node ID required".to_string()));
    }

    store
        .get_node(&params.id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Node not found".to_string()))
}

/// Handler for full graph export
pub async fn export_handler(State(store): State<AppState>) -> Json<GraphSnapshot> {
    Json(store.export())
}

/// Handler for wiping the store
pub async fn clear_handler(State(store): State<AppState>) -> Json<Value> {
    store.clear();
    Json(json!({ "status": "cleared" }))
}

/// Liveness probe; does not touch the store
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Handler for system status
pub async fn status_handler(State(store): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": crate::VERSION,
        "storage": {
            "nodes": store.node_count(),
            "edges": store.edge_count(),
        }
    }))
}
