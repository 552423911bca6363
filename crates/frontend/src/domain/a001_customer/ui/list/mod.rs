use contracts::dashboards::d400_customer_metrics::{CustomerMetrics, MissingLetter};
use contracts::shared::calendar::parse_calendar_date;
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    contains_ignore_case, filter_list, highlight_matches, page_count, page_slice, sort_list,
    toggle_sort, Searchable, Sortable, PAGE_SIZE,
};

impl Searchable for CustomerMetrics {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(&self.customer.full_name, filter)
    }
}

impl Sortable for CustomerMetrics {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "full_name" => self
                .customer
                .full_name
                .to_lowercase()
                .cmp(&other.customer.full_name.to_lowercase()),
            "email" => self
                .customer
                .email
                .to_lowercase()
                .cmp(&other.customer.email.to_lowercase()),
            "birth_date" => compare_dates(&self.customer.birth_date, &other.customer.birth_date),
            "total_sales" => self.total_sales.total_cmp(&other.total_sales),
            "average_sale_value" => self.average_sale_value.total_cmp(&other.average_sale_value),
            "purchase_frequency" => self.purchase_frequency.cmp(&other.purchase_frequency),
            "missing_letter" => self.missing_letter.code().cmp(&other.missing_letter.code()),
            _ => Ordering::Equal,
        }
    }
}

/// Calendar order; dates that do not parse go last
fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parse_calendar_date(a), parse_calendar_date(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn purchases_label(count: usize) -> String {
    format!("{} compras", count)
}

/// Customer table with derived metrics, column sorting, name filter and 5-row pages
#[component]
#[allow(non_snake_case)]
pub fn CustomerList(#[prop(into)] rows: Signal<Vec<CustomerMetrics>>) -> impl IntoView {
    let (filter, set_filter) = signal(String::new());
    let (page, set_page) = signal(0usize);
    // empty field keeps the store order
    let (sort_field, set_sort_field) = signal(String::new());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let on_sort = Callback::new(move |field: String| {
        let (next_field, next_ascending) =
            toggle_sort(&sort_field.get_untracked(), sort_ascending.get_untracked(), &field);
        set_sort_field.set(next_field);
        set_sort_ascending.set(next_ascending);
        set_page.set(0);
    });

    let sorted = Memo::new(move |_| {
        let mut all = rows.get();
        sort_field.with(|field| sort_list(&mut all, field, sort_ascending.get()));
        all
    });
    let filtered = Memo::new(move |_| sorted.with(|all| filter_list(all, &filter.get())));
    let total_pages = Memo::new(move |_| filtered.with(|f| page_count(f.len(), PAGE_SIZE)));
    let visible = Memo::new(move |_| filtered.with(|f| page_slice(f, page.get(), PAGE_SIZE)));

    // keep the page inside range when the list shrinks
    Effect::new(move |_| {
        let last = total_pages.get() - 1;
        if page.get_untracked() > last {
            set_page.set(last);
        }
    });

    let is_filter_active = move || !filter.get().trim().is_empty();

    view! {
        <CardAnimated delay_ms=240>
            <div class="card__header">
                <h3 class="card__title">{icon("customers")}"Lista de Clientes"</h3>
                <p class="card__description">
                    "Gerencie todos os clientes da loja com métricas detalhadas"
                </p>
                <input
                    type="text"
                    class="search-input"
                    class:search-input--active=is_filter_active
                    placeholder="Buscar clientes..."
                    prop:value=move || filter.get()
                    on:input=move |ev| {
                        set_filter.set(event_target_value(&ev));
                        set_page.set(0);
                    }
                />
            </div>

            <div class="table">
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <SortableHeaderCell label="Nome Completo" sort_field="full_name"
                                current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                            <SortableHeaderCell label="Email" sort_field="email"
                                current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                            <SortableHeaderCell label="Data de Nascimento" sort_field="birth_date"
                                current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                            <SortableHeaderCell label="Total Vendas" sort_field="total_sales" align="right"
                                current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                            <SortableHeaderCell label="Média por Venda" sort_field="average_sale_value" align="right"
                                current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                            <SortableHeaderCell label="Frequência" sort_field="purchase_frequency"
                                current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                            <SortableHeaderCell label="Letra Faltante" sort_field="missing_letter"
                                current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let page_rows = visible.get();
                            if page_rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="7">
                                            "Nenhum cliente encontrado."
                                        </td>
                                    </tr>
                                }
                                .into_any();
                            }

                            let current_filter = filter.get_untracked();
                            page_rows
                                .into_iter()
                                .map(|row| {
                                    let total = row.total_sales;
                                    let average = row.average_sale_value;
                                    let letter = row.missing_letter;
                                    let variant = match letter {
                                        MissingLetter::AllPresent => "primary",
                                        MissingLetter::Letter(_) => "neutral",
                                    };
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">
                                                <strong>{highlight_matches(&row.customer.full_name, &current_filter)}</strong>
                                            </td>
                                            <td class="table__cell">{row.customer.email.clone()}</td>
                                            <td class="table__cell">{format_date(&row.customer.birth_date)}</td>
                                            <TableCellMoney value=Signal::derive(move || Some(total)) bold=true />
                                            <TableCellMoney value=Signal::derive(move || Some(average)) />
                                            <td class="table__cell">
                                                {icon("shopping-cart")}
                                                " "
                                                {purchases_label(row.purchase_frequency)}
                                            </td>
                                            <td class="table__cell">
                                                <Badge variant=variant.to_string()>
                                                    {icon("award")}
                                                    {letter.to_string()}
                                                </Badge>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <div class="table-footer">
                <span>
                    {move || format!(
                        "Mostrando {} de {} cliente(s)",
                        visible.with(|v| v.len()),
                        rows.with(|r| r.len()),
                    )}
                </span>
                <div class="header__actions">
                    <button
                        class="button"
                        on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1))
                        disabled=move || page.get() == 0
                    >
                        {icon("chevron-left")}
                        "Anterior"
                    </button>
                    <span>{move || format!("{} / {}", page.get() + 1, total_pages.get())}</span>
                    <button
                        class="button"
                        on:click=move |_| set_page.update(|p| *p += 1)
                        disabled=move || page.get() + 1 >= total_pages.get()
                    >
                        "Próximo"
                        {icon("chevron-right")}
                    </button>
                </div>
            </div>
        </CardAnimated>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_customer_metrics::compute_metrics;
    use contracts::domain::a001_customer::{CustomerId, NewCustomer, Sale};
    use uuid::Uuid;

    fn metrics(name: &str) -> CustomerMetrics {
        customer_row(name, "x@example.com", "1990-01-01", &[10.0])
    }

    fn customer_row(name: &str, email: &str, birth_date: &str, amounts: &[f64]) -> CustomerMetrics {
        let customer = NewCustomer {
            full_name: name.into(),
            email: email.into(),
            birth_date: birth_date.into(),
            sales: amounts.iter().map(|a| Sale::new("2024-01-01", *a)).collect(),
        }
        .into_customer(CustomerId::new(Uuid::from_u128(1)));
        compute_metrics(&customer)
    }

    fn table() -> Vec<CustomerMetrics> {
        vec![
            // total 300, average 150, 2 purchases, missing C
            customer_row("bruno Alves", "zeca@example.com", "1995-3-7", &[100.0, 200.0]),
            // total 50, average 50, 1 purchase, missing B
            customer_row("Ana Costa", "ana@example.com", "1988-12-01", &[50.0]),
            // total 90, average 30, 3 purchases, missing B
            customer_row("Carla Dias", "Bia@example.com", "1995-03-06", &[30.0, 30.0, 30.0]),
            // no sales, birth date unparseable
            customer_row("Duda Ferreira", "duda@example.com", "unknown", &[]),
        ]
    }

    fn names_sorted_by(field: &str, ascending: bool) -> Vec<String> {
        let mut rows = table();
        sort_list(&mut rows, field, ascending);
        rows.into_iter().map(|r| r.customer.full_name).collect()
    }

    #[test]
    fn test_metrics_filter_by_name_only() {
        let rows = vec![metrics("Ana Beatriz"), metrics("Carlos Eduardo")];
        let found = filter_list(&rows, "carlos");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].customer.full_name, "Carlos Eduardo");
        // email is not searched
        assert!(filter_list(&rows, "example.com").is_empty());
    }

    #[test]
    fn test_purchases_label() {
        assert_eq!(purchases_label(0), "0 compras");
        assert_eq!(purchases_label(4), "4 compras");
    }

    #[test]
    fn test_sort_by_name_and_email_ignore_case() {
        assert_eq!(
            names_sorted_by("full_name", true),
            vec!["Ana Costa", "bruno Alves", "Carla Dias", "Duda Ferreira"]
        );
        assert_eq!(
            names_sorted_by("email", true),
            vec!["Ana Costa", "Carla Dias", "Duda Ferreira", "bruno Alves"]
        );
    }

    #[test]
    fn test_sort_by_birth_date_uses_calendar_order() {
        // 1995-3-7 is after 1995-03-06 even though it sorts first as text
        assert_eq!(
            names_sorted_by("birth_date", true),
            vec!["Ana Costa", "Carla Dias", "bruno Alves", "Duda Ferreira"]
        );
    }

    #[test]
    fn test_sort_by_metrics() {
        assert_eq!(
            names_sorted_by("total_sales", false),
            vec!["bruno Alves", "Carla Dias", "Ana Costa", "Duda Ferreira"]
        );
        assert_eq!(
            names_sorted_by("average_sale_value", true),
            vec!["Duda Ferreira", "Carla Dias", "Ana Costa", "bruno Alves"]
        );
        assert_eq!(
            names_sorted_by("purchase_frequency", false),
            vec!["Carla Dias", "bruno Alves", "Ana Costa", "Duda Ferreira"]
        );
    }

    #[test]
    fn test_sort_by_missing_letter() {
        // three rows miss B and keep their store order ahead of the C row
        assert_eq!(
            names_sorted_by("missing_letter", true),
            vec!["Ana Costa", "Carla Dias", "Duda Ferreira", "bruno Alves"]
        );
        assert_eq!(names_sorted_by("missing_letter", false)[0], "bruno Alves");
    }

    #[test]
    fn test_sort_then_filter_keeps_order() {
        let mut rows = table();
        sort_list(&mut rows, "total_sales", true);
        let found = filter_list(&rows, "s");
        let names: Vec<&str> = found.iter().map(|r| r.customer.full_name.as_str()).collect();
        assert_eq!(names, vec!["Ana Costa", "Carla Dias", "bruno Alves"]);
    }
}
