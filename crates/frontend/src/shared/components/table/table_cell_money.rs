//! Table cell for money values
//!
//! ```rust,ignore
//! <TableCellMoney value=Signal::derive(move || Some(total)) bold=true />
//! ```

use super::number_format::format_currency;
use leptos::prelude::*;

/// Right-aligned `R$ 1.234,56` cell; `None` renders a dash
#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<Option<f64>>,

    /// Bold text (totals)
    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let formatted_text = move || match value.get() {
        Some(v) => format_currency(v),
        None => "—".to_string(),
    };

    let cell_style = move || {
        let mut styles = Vec::new();
        if value.get().is_some_and(|v| v > 0.0) {
            styles.push("color: var(--color-success-700)");
        }
        if bold {
            styles.push("font-weight: 600");
        }
        styles.join("; ")
    };

    view! {
        <td class="table__cell text-right">
            <span style=cell_style>
                {formatted_text}
            </span>
        </td>
    }
}
