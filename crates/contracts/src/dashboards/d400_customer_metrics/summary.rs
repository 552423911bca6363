use super::metrics::CustomerMetrics;
use serde::{Deserialize, Serialize};

/// Figures for the four dashboard cards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Sum of every customer's total
    pub total_sales: f64,
    pub customer_count: usize,
    /// Highest total sales
    pub top_by_volume: Option<CustomerMetrics>,
    /// Highest average sale value
    pub top_by_average: Option<CustomerMetrics>,
    /// Most purchases
    pub top_by_frequency: Option<CustomerMetrics>,
}

pub fn summarize(metrics: &[CustomerMetrics]) -> DashboardSummary {
    DashboardSummary {
        total_sales: metrics.iter().fold(0.0, |acc, m| acc + m.total_sales),
        customer_count: metrics.len(),
        top_by_volume: leader_by(metrics, |m| m.total_sales),
        top_by_average: leader_by(metrics, |m| m.average_sale_value),
        top_by_frequency: leader_by(metrics, |m| m.purchase_frequency as f64),
    }
}

/// Maximum by `key`; the later entry wins a tie
fn leader_by(
    metrics: &[CustomerMetrics],
    key: impl Fn(&CustomerMetrics) -> f64,
) -> Option<CustomerMetrics> {
    metrics
        .iter()
        .reduce(|prev, current| if key(prev) > key(current) { prev } else { current })
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_customer_metrics::compute_metrics;
    use crate::domain::a001_customer::{Customer, CustomerId, Sale};
    use uuid::Uuid;

    fn customer(n: u128, name: &str, amounts: &[f64]) -> Customer {
        Customer {
            id: CustomerId::new(Uuid::from_u128(n)),
            full_name: name.into(),
            email: format!("c{}@example.com", n),
            birth_date: "2000-01-01".into(),
            sales: amounts.iter().map(|a| Sale::new("2024-01-01", *a)).collect(),
        }
    }

    #[test]
    fn test_empty_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_sales, 0.0);
        assert_eq!(summary.customer_count, 0);
        assert!(summary.top_by_volume.is_none());
        assert!(summary.top_by_average.is_none());
        assert!(summary.top_by_frequency.is_none());
    }

    #[test]
    fn test_leaders() {
        let metrics: Vec<_> = [
            customer(1, "Volume", &[100.0, 100.0, 100.0]),
            customer(2, "Media", &[250.0]),
            customer(3, "Frequente", &[1.0, 1.0, 1.0, 1.0]),
        ]
        .iter()
        .map(compute_metrics)
        .collect();

        let summary = summarize(&metrics);
        assert_eq!(summary.total_sales, 554.0);
        assert_eq!(summary.customer_count, 3);
        assert_eq!(summary.top_by_volume.unwrap().customer.full_name, "Volume");
        assert_eq!(summary.top_by_average.unwrap().customer.full_name, "Media");
        assert_eq!(summary.top_by_frequency.unwrap().customer.full_name, "Frequente");
    }

    #[test]
    fn test_tie_goes_to_later_customer() {
        let metrics: Vec<_> = [customer(1, "Primeiro", &[50.0]), customer(2, "Segundo", &[50.0])]
            .iter()
            .map(compute_metrics)
            .collect();

        let summary = summarize(&metrics);
        assert_eq!(summary.top_by_volume.unwrap().customer.full_name, "Segundo");
    }
}
