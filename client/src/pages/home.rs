//! Home page: composer or sign-in prompt above the feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. The feed query is started on mount whatever the
//! session state, so posts are warm by the time the user can compose.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::create_post_wizard::CreatePostWizard;
use crate::components::feed::Feed;
use crate::components::layout::PageLayout;
use crate::components::sign_in_button::SignInButton;
use crate::state::auth::{Identity, IdentityHandle};
use crate::state::query::{POSTS_GET_ALL, use_query};

/// Observable page states, driven by the identity provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeState {
    /// Session not resolved yet: render an empty placeholder.
    Pending,
    SignedOut,
    SignedIn,
}

pub fn home_state(identity: &dyn Identity) -> HomeState {
    if !identity.is_ready() {
        HomeState::Pending
    } else if identity.is_authenticated() {
        HomeState::SignedIn
    } else {
        HomeState::SignedOut
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let identity = expect_context::<IdentityHandle>();

    // Start fetching ASAP; `Feed` shares this request through the cache.
    use_query(POSTS_GET_ALL);

    let state = Memo::new(move |_| home_state(identity.as_ref()));

    move || match state.get() {
        HomeState::Pending => view! { <div></div> }.into_any(),
        HomeState::SignedOut => view! {
            <PageLayout>
                <div class="home__header">
                    <div class="home__sign-in">
                        <SignInButton/>
                    </div>
                </div>
                <Feed/>
            </PageLayout>
        }
        .into_any(),
        HomeState::SignedIn => view! {
            <PageLayout>
                <div class="home__header">
                    <CreatePostWizard/>
                </div>
                <Feed/>
            </PageLayout>
        }
        .into_any(),
    }
}
