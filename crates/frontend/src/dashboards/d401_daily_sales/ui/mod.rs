pub mod sales_chart;

pub use sales_chart::SalesChart;
