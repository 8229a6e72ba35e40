use axum::Json;
use serde_json::{json, Value};

/// GET /api/health
/// Lets the frontend wake the backend before the first real request.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "online",
        "message": "Backend is ready"
    }))
}
