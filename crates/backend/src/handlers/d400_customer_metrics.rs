use axum::http::StatusCode;
use axum::Json;
use contracts::dashboards::d400_customer_metrics::{
    compute_metrics, summarize, CustomerMetricsResponse,
};
use contracts::usecases::u501_import_customers::normalize_with_random_ids;

use crate::shared::fixtures;

/// GET /api/d400/customer_metrics
pub async fn get_customer_metrics() -> Result<Json<CustomerMetricsResponse>, StatusCode> {
    let payload = fixtures::customers_payload().map_err(|e| {
        tracing::error!("Failed to compute customer metrics: {}", e);
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    let customers = normalize_with_random_ids(&payload.parsed);
    let rows: Vec<_> = customers.iter().map(compute_metrics).collect();
    let summary = summarize(&rows);

    Ok(Json(CustomerMetricsResponse { rows, summary }))
}
