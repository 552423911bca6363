use axum::http::StatusCode;
use axum::Json;

use crate::shared::fixtures;

/// GET /customers
///
/// The raw payload exactly as stored in the fixture, redundant blocks included.
pub async fn list_raw() -> Result<Json<serde_json::Value>, StatusCode> {
    match fixtures::customers_payload() {
        Ok(payload) => Ok(Json(payload.raw.clone())),
        Err(e) => {
            tracing::error!("Failed to serve customers: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
