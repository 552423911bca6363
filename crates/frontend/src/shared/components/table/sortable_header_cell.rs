//! Clickable table header that toggles sorting on its column

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;

/// Header cell with a sort arrow (▲▼)
///
/// Clicking it reports `sort_field` through `on_sort`; the owner decides the new direction.
#[component]
pub fn SortableHeaderCell(
    /// Header text
    #[prop(into)]
    label: String,

    /// Field passed to `Sortable::compare_by_field`
    #[prop(into)]
    sort_field: String,

    #[prop(into)]
    current_sort_field: Signal<String>,

    #[prop(into)]
    sort_ascending: Signal<bool>,

    on_sort: Callback<String>,

    /// Alignment (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    let cell_class = if align == "right" {
        "table__header-cell text-right"
    } else {
        "table__header-cell"
    };

    view! {
        <th class=cell_class>
            <button
                type="button"
                class="table__sortable-header"
                on:click=move |_| on_sort.run(sort_field_for_click.clone())
            >
                {label}
                <span class=move || get_sort_class(&current_sort_field.get(), &sort_field_for_class)>
                    {move || {
                        get_sort_indicator(
                            &current_sort_field.get(),
                            &sort_field_for_indicator,
                            sort_ascending.get(),
                        )
                    }}
                </span>
            </button>
        </th>
    }
}
