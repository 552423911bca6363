use crate::domain::a001_customer::store::CustomersStore;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Customer list outlives route changes; restored from localStorage here
    provide_context(CustomersStore::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
