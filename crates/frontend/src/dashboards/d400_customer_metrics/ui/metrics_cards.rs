use contracts::dashboards::d400_customer_metrics::{CustomerMetrics, DashboardSummary};
use leptos::prelude::*;

use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::table::format_currency;
use crate::shared::icons::icon;

/// Name of the leader, or a dash when there are no customers
fn leader_name(leader: &Option<CustomerMetrics>) -> String {
    leader
        .as_ref()
        .map(|m| m.customer.full_name.clone())
        .unwrap_or_else(|| "—".to_string())
}

fn leader_detail(leader: &Option<CustomerMetrics>, detail: impl Fn(&CustomerMetrics) -> String) -> String {
    leader.as_ref().map(detail).unwrap_or_default()
}

#[component]
fn MetricCard(
    label: &'static str,
    icon_name: &'static str,
    delay_ms: u32,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] subtitle: Signal<String>,
) -> impl IntoView {
    view! {
        <CardAnimated delay_ms=delay_ms>
            <div class="metric__label">{icon(icon_name)}" "{label}</div>
            <div class="metric__value">{value}</div>
            <div class="metric__subtitle">{subtitle}</div>
        </CardAnimated>
    }
}

/// The four summary cards above the customer table
#[component]
pub fn MetricsCards(#[prop(into)] summary: Signal<DashboardSummary>) -> impl IntoView {
    view! {
        <div class="metrics-grid">
            <MetricCard
                label="Total de Vendas"
                icon_name="dollar"
                delay_ms=0
                value=Signal::derive(move || summary.with(|s| format_currency(s.total_sales)))
                subtitle=Signal::derive(move || summary.with(|s| format!("{} clientes", s.customer_count)))
            />
            <MetricCard
                label="Maior Volume"
                icon_name="trending-up"
                delay_ms=80
                value=Signal::derive(move || summary.with(|s| leader_name(&s.top_by_volume)))
                subtitle=Signal::derive(move || summary.with(|s| {
                    leader_detail(&s.top_by_volume, |m| format_currency(m.total_sales))
                }))
            />
            <MetricCard
                label="Maior Média"
                icon_name="award"
                delay_ms=160
                value=Signal::derive(move || summary.with(|s| leader_name(&s.top_by_average)))
                subtitle=Signal::derive(move || summary.with(|s| {
                    leader_detail(&s.top_by_average, |m| format!("{} por venda", format_currency(m.average_sale_value)))
                }))
            />
            <MetricCard
                label="Mais Frequente"
                icon_name="shopping-cart"
                delay_ms=240
                value=Signal::derive(move || summary.with(|s| leader_name(&s.top_by_frequency)))
                subtitle=Signal::derive(move || summary.with(|s| {
                    leader_detail(&s.top_by_frequency, |m| format!("{} compras", m.purchase_frequency))
                }))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_leader_renders_dash() {
        let summary = DashboardSummary::default();
        assert_eq!(leader_name(&summary.top_by_volume), "—");
        assert_eq!(leader_detail(&summary.top_by_volume, |m| m.total_sales.to_string()), "");
    }
}
