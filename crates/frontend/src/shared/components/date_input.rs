use leptos::prelude::*;

/// Native date picker
///
/// The browser shows the date in the user's locale (dd/mm/aaaa for pt-BR);
/// the value always travels as yyyy-mm-dd.
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    on_change: impl Fn(String) + 'static,
    /// Earliest selectable date (yyyy-mm-dd)
    #[prop(optional, into)]
    min: Option<String>,
    /// Latest selectable date (yyyy-mm-dd)
    #[prop(optional, into)]
    max: Option<String>,
    #[prop(optional, into)]
    id: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            id=id
            min=min
            max=max
            prop:value=value
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
