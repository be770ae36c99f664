//! Health check handler

use axum::Json;
use serde_json::{json, Value};

/// GET /health - Liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
