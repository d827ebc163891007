//! Post composer for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds an input to `ComposerState`, submits through `posts.create`, and
//! applies the resulting effect: invalidate the feed query on success or
//! raise an error toast on failure. The new post only appears once the feed
//! re-fetch returns it.

use leptos::prelude::*;

use crate::components::loading::{LoadingPage, LoadingSpinner};
use crate::net::types::CreatePostInput;
use crate::state::auth::IdentityHandle;
#[cfg(feature = "hydrate")]
use crate::state::composer::ComposerEffect;
use crate::state::composer::ComposerState;
#[cfg(feature = "hydrate")]
use crate::state::query::POSTS_GET_ALL;
use crate::state::query::QueryClient;
use crate::state::toast::Toasts;
use crate::util::paths::avatar_alt;

#[component]
pub fn CreatePostWizard() -> impl IntoView {
    let identity = expect_context::<IdentityHandle>();
    let client = expect_context::<QueryClient>();
    let toasts = expect_context::<Toasts>();
    let composer = RwSignal::new(ComposerState::default());

    // Composing requires a user with a handle.
    let user = Memo::new(move |_| identity.current_user().filter(|u| u.username.is_some()));

    let submit = move |input: CreatePostInput| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_post(&input).await;
            if let Err(e) = &result {
                log::warn!("posts.create failed: {e}");
            }
            match composer.try_update(|c| c.finish(&result)) {
                Some(ComposerEffect::InvalidateFeed) => client.invalidate(POSTS_GET_ALL),
                Some(ComposerEffect::Notify(message)) => {
                    toasts.error(message);
                }
                None => {}
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (input, client, toasts);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
        }
        if let Some(input) = composer.try_update(|c| c.on_key(&ev.key())).flatten() {
            submit(input);
        }
    };

    let on_click = move |_| {
        if let Some(input) = composer.try_update(ComposerState::begin_submit).flatten() {
            submit(input);
        }
    };

    view! {
        <Show when=move || user.with(Option::is_some) fallback=|| view! { <LoadingPage/> }>
            <div class="composer">
                <img
                    class="composer__avatar"
                    src=move || user.get().map(|u| u.profile_image_url).unwrap_or_default()
                    alt=move || avatar_alt(user.get().and_then(|u| u.username).as_deref())
                    width="56"
                    height="56"
                />
                <input
                    class="composer__input"
                    type="text"
                    placeholder="type some emojis!"
                    prop:value=move || composer.with(|c| c.draft.clone())
                    on:input=move |ev| composer.update(|c| c.set_draft(event_target_value(&ev)))
                    on:keydown=on_keydown
                />
                <Show when=move || composer.with(ComposerState::can_submit)>
                    <button class="composer__submit" on:click=on_click>
                        "📫"
                    </button>
                </Show>
                <Show when=move || composer.with(|c| c.posting)>
                    <div class="composer__busy">
                        <LoadingSpinner size=20/>
                    </div>
                </Show>
            </div>
        </Show>
    }
}
