use axum::http::StatusCode;
use axum::Json;
use contracts::dashboards::d401_daily_sales::{group_sales_by_date, DailySalesPoint};
use contracts::usecases::u501_import_customers::normalize_with_random_ids;

use crate::shared::fixtures;

/// GET /api/d401/daily_sales
pub async fn get_daily_sales() -> Result<Json<Vec<DailySalesPoint>>, StatusCode> {
    match fixtures::customers_payload() {
        Ok(payload) => {
            let customers = normalize_with_random_ids(&payload.parsed);
            Ok(Json(group_sales_by_date(&customers)))
        }
        Err(e) => {
            tracing::error!("Failed to compute daily sales: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
