//! Sign-in affordance for signed-out visitors.

use leptos::prelude::*;

use crate::state::auth::IdentityHandle;

/// Starts the identity provider's sign-in flow.
#[component]
pub fn SignInButton() -> impl IntoView {
    let identity = expect_context::<IdentityHandle>();

    view! {
        <button class="btn sign-in-button" on:click=move |_| identity.sign_in()>
            "Sign in"
        </button>
    }
}
