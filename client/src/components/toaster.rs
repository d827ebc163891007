//! Renders the transient notification queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once at the application root; any component that pushes through
//! the `Toasts` service shows up here. Clicking a toast dismisses it early.

use leptos::prelude::*;

use crate::state::toast::Toasts;

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="toaster" aria-live="polite">
            {move || {
                toasts
                    .items()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast.kind.class() role="alert" on:click=move |_| toasts.dismiss(id)>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
