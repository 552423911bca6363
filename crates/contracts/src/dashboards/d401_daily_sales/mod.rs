//! Daily sales time series for the trend chart.

pub mod series;

pub use series::{group_sales_by_date, DailySalesPoint};
