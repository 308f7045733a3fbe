pub mod auth;
pub mod health;
pub mod posts;

use axum::Json;
use axum::http::{Method, StatusCode, Uri};

/// Catch-all for unknown routes, wrapped in the standard envelope.
pub async fn fallback(method: Method, uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
          "success": false,
          "error": "Route not found",
          "message": format!("Cannot {} {}", method, uri),
        })),
    )
}
