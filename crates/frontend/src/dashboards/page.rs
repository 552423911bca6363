use contracts::dashboards::d400_customer_metrics::{compute_metrics, summarize, CustomerMetrics};
use contracts::dashboards::d401_daily_sales::group_sales_by_date;
use leptos::prelude::*;

use crate::dashboards::d400_customer_metrics::ui::MetricsCards;
use crate::dashboards::d401_daily_sales::ui::SalesChart;
use crate::domain::a001_customer::store::use_customers;
use crate::domain::a001_customer::ui::{AddCustomerForm, CustomerList};
use crate::layout::Shell;
use crate::shared::api_utils::api_base;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashboardStatus {
    Loading,
    Failed,
    Ready,
}

/// Loading only matters while there is nothing to show yet
fn dashboard_status(loading: bool, empty: bool, has_error: bool) -> DashboardStatus {
    if loading && empty {
        DashboardStatus::Loading
    } else if has_error {
        DashboardStatus::Failed
    } else {
        DashboardStatus::Ready
    }
}

/// Private dashboard: metrics cards, daily sales chart and customer table
#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_customers();
    store.load_if_empty();

    // Everything below is derived from the stored list on every change
    let metrics = Memo::new(move |_| {
        store.snapshot.with(|s| {
            s.customers
                .iter()
                .map(compute_metrics)
                .collect::<Vec<CustomerMetrics>>()
        })
    });
    let summary = Memo::new(move |_| metrics.with(|m| summarize(m)));
    let daily_sales = Memo::new(move |_| store.snapshot.with(|s| group_sales_by_date(&s.customers)));

    let is_empty = Memo::new(move |_| store.snapshot.with(|s| s.is_empty()));

    let status = Memo::new(move |_| {
        dashboard_status(
            store.loading.get(),
            is_empty.get(),
            store.error.with(|e| e.is_some()),
        )
    });

    let status_view = move || {
        if status.get() == DashboardStatus::Loading {
            return view! {
                <div class="page__loading">
                    <div class="spinner"></div>
                    <h2>"Carregando dados..."</h2>
                    <p class="card__description">"Buscando informações dos clientes da loja"</p>
                </div>
            }
            .into_any();
        }

        if let (DashboardStatus::Failed, Some(err)) = (status.get(), store.error.get()) {
            return view! {
                <div class="warning-box">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">
                        {format!("Erro ao carregar dados: {}", err)}
                        <br />
                        {format!("Certifique-se de que a API está rodando em {}", api_base())}
                    </span>
                </div>
            }
            .into_any();
        }

        ().into_any()
    };

    // switches between the empty card and the dashboard; the form stays mounted across it
    let content = move || {
        if is_empty.get() {
            return view! {
                <CardAnimated>
                    <h3 class="card__title">"Nenhum cliente encontrado"</h3>
                    <p class="card__description">
                        "Comece adicionando um novo cliente para ver as estatísticas"
                    </p>
                </CardAnimated>
            }
            .into_any();
        }

        view! {
            <MetricsCards summary=summary />
            <SalesChart series=daily_sales />
            <CustomerList rows=metrics />
        }
        .into_any()
    };

    view! {
        <Shell>
            <div class="page__intro">
                <h1>"Dashboard da Loja de Brinquedos"</h1>
                <p>"Gerencie clientes e visualize estatísticas de vendas"</p>
            </div>
            {status_view}
            <Show when=move || status.get() == DashboardStatus::Ready>
                <AddCustomerForm />
                {content}
            </Show>
        </Shell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_customer_keeps_dashboard_ready() {
        // empty list, then one added customer: the form stays under the same Ready state
        assert_eq!(dashboard_status(false, true, false), DashboardStatus::Ready);
        assert_eq!(dashboard_status(false, false, false), DashboardStatus::Ready);
    }

    #[test]
    fn test_loading_only_without_rows() {
        assert_eq!(dashboard_status(true, true, false), DashboardStatus::Loading);
        assert_eq!(dashboard_status(true, false, false), DashboardStatus::Ready);
    }

    #[test]
    fn test_error_hides_dashboard() {
        assert_eq!(dashboard_status(false, true, true), DashboardStatus::Failed);
        assert_eq!(dashboard_status(true, true, true), DashboardStatus::Loading);
    }
}
