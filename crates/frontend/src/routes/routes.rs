use crate::dashboards::DashboardPage;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn PrivateDashboard() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardPage />
        </RequireAuth>
    }
}

/// `/` login, `/home` dashboard (signed in only), anything else 404
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=LoginPage />
                <Route path=path!("/home") view=PrivateDashboard />
            </Routes>
        </Router>
    }
}
