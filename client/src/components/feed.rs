//! Home feed: every post with its author, in server order.
//!
//! SYSTEM CONTEXT
//! ==============
//! Subscribes to the shared `posts.getAll` query. Ordering and filtering are
//! the server's job; this component only maps load states to views.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::loading::LoadingPage;
use crate::components::post_view::PostView;
use crate::net::types::PostWithAuthor;
use crate::state::query::{POSTS_GET_ALL, QueryState, use_query};

/// Static message for a feed that failed to load.
pub const FEED_ERROR_MESSAGE: &str = "somehting went wrong 😥";

/// What the feed renders for a given query state.
#[derive(Clone, Debug, PartialEq)]
pub enum FeedView {
    Loading,
    Error,
    Posts(Vec<PostWithAuthor>),
}

impl From<QueryState<Vec<PostWithAuthor>>> for FeedView {
    fn from(state: QueryState<Vec<PostWithAuthor>>) -> Self {
        match state {
            QueryState::Loading => Self::Loading,
            QueryState::Failed(_) => Self::Error,
            QueryState::Ready(posts) => Self::Posts(posts),
        }
    }
}

#[component]
pub fn Feed() -> impl IntoView {
    let client = use_query(POSTS_GET_ALL);

    move || match FeedView::from(client.state::<Vec<PostWithAuthor>>(POSTS_GET_ALL)) {
        FeedView::Loading => view! { <LoadingPage/> }.into_any(),
        FeedView::Error => view! { <div class="feed__error">{FEED_ERROR_MESSAGE}</div> }.into_any(),
        FeedView::Posts(posts) => view! {
            <div class="feed">
                {posts.into_iter().map(|record| view! { <PostView record=record/> }).collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
    }
}
