use chrono::Local;
use contracts::domain::a001_customer::{CustomerForm, CustomerFormError, CustomerFormField};
use contracts::shared::calendar::{format_calendar_date, parse_calendar_date};
use leptos::prelude::*;

use crate::domain::a001_customer::store::use_customers;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::date_input::DateInput;
use crate::shared::icons::icon;

fn build_form(full_name: String, email: String, birth_date: &str) -> CustomerForm {
    CustomerForm {
        full_name,
        email,
        birth_date: parse_calendar_date(birth_date),
    }
}

/// First message for a field, if it failed
fn field_error(errors: &[CustomerFormError], field: CustomerFormField) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field() == field)
        .map(|e| e.to_string())
}

#[component]
#[allow(non_snake_case)]
pub fn AddCustomerForm() -> impl IntoView {
    let store = use_customers();

    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (birth_date, set_birth_date) = signal(String::new());
    let (errors, set_errors) = signal(Vec::<CustomerFormError>::new());
    let (added_name, set_added_name) = signal(Option::<String>::None);

    let today = Local::now().date_naive();
    let min_date = format_calendar_date(CustomerForm::min_birth_date());
    let max_date = format_calendar_date(today);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_added_name.set(None);

        let form = build_form(
            full_name.get_untracked(),
            email.get_untracked(),
            &birth_date.get_untracked(),
        );
        match form.validate(Local::now().date_naive()) {
            Ok(customer) => {
                if let Some(added) = store.add_customer(customer) {
                    log::info!("Added customer {}", added.to_string_id());
                    set_added_name.set(Some(added.full_name));
                }
                set_errors.set(Vec::new());
                set_full_name.set(String::new());
                set_email.set(String::new());
                set_birth_date.set(String::new());
            }
            Err(errs) => set_errors.set(errs),
        }
    };

    let error_for = move |field: CustomerFormField| {
        move || {
            errors.with(|errs| field_error(errs, field)).map(|msg| {
                view! { <span class="form-group__error">{msg}</span> }
            })
        }
    };

    view! {
        <CardAnimated>
            <h3 class="card__title">{icon("user-plus")}"Adicionar Cliente"</h3>
            <p class="card__description">"Cadastre um novo cliente na loja"</p>

            <form on:submit=on_submit novalidate=true>
                <div class="form-grid">
                    <div class="form-group">
                        <label for="nome-completo">"Nome Completo"</label>
                        <input
                            type="text"
                            id="nome-completo"
                            placeholder="Ex: Maria Silva Santos"
                            prop:value=move || full_name.get()
                            on:input=move |ev| set_full_name.set(event_target_value(&ev))
                        />
                        {error_for(CustomerFormField::FullName)}
                    </div>

                    <div class="form-group">
                        <label for="email-cliente">"Email"</label>
                        <input
                            type="email"
                            id="email-cliente"
                            placeholder="maria@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        {error_for(CustomerFormField::Email)}
                    </div>

                    <div class="form-group">
                        <label for="nascimento">"Data de Nascimento"</label>
                        <DateInput
                            id="nascimento"
                            value=birth_date
                            on_change=move |v| set_birth_date.set(v)
                            min=min_date
                            max=max_date
                        />
                        {error_for(CustomerFormField::BirthDate)}
                    </div>
                </div>

                <div class="header__actions" style="margin-top: 16px;">
                    <button type="submit" class="button button--primary">
                        {icon("user-plus")}
                        "Adicionar"
                    </button>
                    {move || added_name.get().map(|name| view! {
                        <span class="form-success">{format!("Cliente adicionado! {}", name)}</span>
                    })}
                </div>
            </form>
        </CardAnimated>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_build_form_parses_date_input() {
        let form = build_form("Maria".into(), "maria@email.com".into(), "1990-07-04");
        assert_eq!(form.birth_date, NaiveDate::from_ymd_opt(1990, 7, 4));

        let empty = build_form("Maria".into(), "maria@email.com".into(), "");
        assert_eq!(empty.birth_date, None);
    }

    #[test]
    fn test_field_error_picks_matching_field() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let errors = build_form("M".into(), "nope".into(), "").validate(today).unwrap_err();

        assert_eq!(
            field_error(&errors, CustomerFormField::FullName).as_deref(),
            Some("Nome deve ter pelo menos 2 caracteres")
        );
        assert_eq!(
            field_error(&errors, CustomerFormField::Email).as_deref(),
            Some("Email inválido")
        );
        assert_eq!(
            field_error(&errors, CustomerFormField::BirthDate).as_deref(),
            Some("Data de nascimento é obrigatória")
        );
    }
}
