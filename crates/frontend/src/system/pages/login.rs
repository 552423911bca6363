use contracts::system::auth::{LoginRequest, DEMO_EMAIL, DEMO_PASSWORD};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    // Already signed in (restored session or successful login): go to the dashboard
    Effect::new(move |_| {
        if auth_state.get().is_authenticated {
            navigate(
                "/home",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            if let Err(e) = do_login(set_auth_state, request).await {
                set_error_message.set(Some(e));
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"ToyStore Manager"</h1>
                <h2>"Faça login para acessar o painel"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder=DEMO_EMAIL
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="senha">"Senha"</label>
                        <input
                            type="password"
                            id="senha"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"Credenciais de teste:"</p>
                    <p>"Email: " <strong>{DEMO_EMAIL}</strong></p>
                    <p>"Senha: " <strong>{DEMO_PASSWORD}</strong></p>
                </div>
            </div>
        </div>
    }
}
