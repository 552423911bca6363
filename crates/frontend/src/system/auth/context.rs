use contracts::system::auth::{authenticate, AuthSnapshot, LoginRequest, User, LOGIN_DELAY_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use super::storage;

pub const INVALID_CREDENTIALS: &str = "Email ou senha inválidos";

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    // Restore the session from localStorage before the first render
    let (auth_state, set_auth_state) = signal(storage::load_session());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthSnapshot>, WriteSignal<AuthSnapshot>) {
    let auth_state =
        use_context::<ReadSignal<AuthSnapshot>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthSnapshot>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login
///
/// Waits [`LOGIN_DELAY_MS`] to mimic a network round trip, then checks the
/// built-in account. The setter is passed in because the reactive owner is
/// gone by the time the timer fires.
pub async fn do_login(
    set_auth_state: WriteSignal<AuthSnapshot>,
    request: LoginRequest,
) -> Result<User, String> {
    TimeoutFuture::new(LOGIN_DELAY_MS).await;

    let user = authenticate(&request).ok_or_else(|| INVALID_CREDENTIALS.to_string())?;
    let snapshot = AuthSnapshot::logged_in(user.clone());
    storage::save_session(&snapshot);
    set_auth_state.set(snapshot);

    log::info!("Logged in as {}", user.email);
    Ok(user)
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthSnapshot>) {
    let snapshot = AuthSnapshot::logged_out();
    storage::save_session(&snapshot);
    set_auth_state.set(snapshot);
}
