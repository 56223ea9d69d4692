use axum::{Json, response::IntoResponse};

// health handler
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "seafront-api",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
