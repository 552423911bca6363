//! Per-customer sales metrics and the leaders shown on the dashboard cards.

pub mod dto;
pub mod metrics;
pub mod summary;

pub use dto::CustomerMetricsResponse;
pub use metrics::{compute_metrics, first_missing_letter, CustomerMetrics, MissingLetter};
pub use summary::{summarize, DashboardSummary};
