//! Page chrome shared by top-level routes.

use leptos::prelude::*;

/// Centered single-column layout.
#[component]
pub fn PageLayout(children: Children) -> impl IntoView {
    view! {
        <main class="page-layout">
            <div class="page-layout__column">{children()}</div>
        </main>
    }
}
