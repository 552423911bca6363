use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let user_name = move || {
        auth_state
            .get()
            .user
            .map(|u| u.name)
            .unwrap_or_default()
    };
    let user_initial = move || {
        auth_state
            .get()
            .user
            .and_then(|u| u.initial())
            .map(String::from)
            .unwrap_or_default()
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"ToyStore Manager"</span>
            </div>
            <div class="header__actions">
                <span class="header__avatar" aria-hidden="true">{user_initial}</span>
                <span class="header__user">{user_name}</span>
                <button
                    class="button"
                    aria-label="Sair"
                    on:click=move |_| do_logout(set_auth_state)
                >
                    {icon("logout")}
                    "Sair"
                </button>
            </div>
        </header>
    }
}
