pub mod d400_customer_metrics;
pub mod d401_daily_sales;
pub mod page;

pub use page::DashboardPage;
