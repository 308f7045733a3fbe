use axum::Json;
use chrono::Utc;

/// GET /health
/// Response: 200 OK with JSON
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
      "status": "OK",
      "message": "Blog API is running",
      "timestamp": Utc::now().to_rfc3339(),
    }))
}
