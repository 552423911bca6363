use axum::{routing::get, Router};

use crate::handlers;

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // MOCK API (JSON server replacement)
        // ========================================
        .route("/customers", get(handlers::customers::list_raw))
        // ========================================
        // DASHBOARDS
        // ========================================
        // D400 Customer Metrics
        .route(
            "/api/d400/customer_metrics",
            get(handlers::d400_customer_metrics::get_customer_metrics),
        )
        // D401 Daily Sales
        .route(
            "/api/d401/daily_sales",
            get(handlers::d401_daily_sales::get_daily_sales),
        )
}
