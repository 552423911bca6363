pub mod header;

use header::Header;
use leptos::prelude::*;

/// Authenticated page frame.
///
/// ```text
/// +------------------------------------------+
/// |  Header (title, avatar, logout)          |
/// +------------------------------------------+
/// |  Content                                 |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app">
            <Header />
            <main class="page">
                {children()}
            </main>
        </div>
    }
}
