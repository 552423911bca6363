use super::metrics::CustomerMetrics;
use super::summary::DashboardSummary;
use serde::{Deserialize, Serialize};

/// Response of `GET /api/d400/customer_metrics`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerMetricsResponse {
    /// One row per customer, in source order
    pub rows: Vec<CustomerMetrics>,
    pub summary: DashboardSummary,
}
