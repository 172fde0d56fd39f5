use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "now": Utc::now(),
        "service": "space-api"
    }))
}
