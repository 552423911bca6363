use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Component that requires authentication
/// Sends anonymous visitors back to the login page
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated
            fallback=|| view! { <Redirect path="/" /> }
        >
            {children()}
        </Show>
    }
}
