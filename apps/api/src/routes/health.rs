use axum::Json;
use serde_json::{json, Value};

/// GET /api/health
/// Fixed status payload; reports nothing about the store.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "Resume Builder API is running"
    }))
}
