use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Página não encontrada"</p>
            <A href="/">"Voltar para o início"</A>
        </div>
    }
}
