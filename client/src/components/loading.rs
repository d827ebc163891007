//! Loading placeholders.

use leptos::prelude::*;

/// Inline busy indicator.
#[component]
pub fn LoadingSpinner(#[prop(default = 16)] size: u32) -> impl IntoView {
    view! {
        <div
            class="loading-spinner"
            role="status"
            aria-label="Loading"
            style=format!("width: {size}px; height: {size}px;")
        ></div>
    }
}

/// Full-width placeholder shown while a section has nothing to render yet.
#[component]
pub fn LoadingPage() -> impl IntoView {
    view! {
        <div class="loading-page">
            <LoadingSpinner size=60/>
        </div>
    }
}
