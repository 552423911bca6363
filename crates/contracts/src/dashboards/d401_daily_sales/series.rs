use crate::domain::a001_customer::Customer;
use crate::shared::calendar::parse_calendar_date;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Total of all sales on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySalesPoint {
    pub date: String,
    pub amount: f64,
}

/// Sum every customer's sales per exact date string, oldest date first.
///
/// Ordering uses the parsed calendar date, so `2024-1-10` sorts after
/// `2024-1-9`. Distinct strings for the same day stay separate points and
/// are ordered lexically; unparseable strings go last.
pub fn group_sales_by_date(customers: &[Customer]) -> Vec<DailySalesPoint> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for sale in customers.iter().flat_map(|c| c.sales.iter()) {
        *totals.entry(sale.date.as_str()).or_insert(0.0) += sale.amount;
    }

    let mut points: Vec<DailySalesPoint> = totals
        .into_iter()
        .map(|(date, amount)| DailySalesPoint {
            date: date.to_string(),
            amount,
        })
        .collect();

    points.sort_by_cached_key(|point| {
        let parsed = parse_calendar_date(&point.date);
        (parsed.is_none(), parsed, point.date.clone())
    });
    points
}
