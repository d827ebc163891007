//! A single feed entry: avatar, handle, age, and content.
//!
//! DESIGN
//! ======
//! Pure rendering of one `PostWithAuthor`. The relative age is computed when
//! the view is built, so a re-render refreshes it.

use leptos::prelude::*;

use crate::net::types::PostWithAuthor;
use crate::util::paths::{avatar_alt, handle, post_path, profile_path};
use crate::util::relative_time::{from_now, now};

#[component]
pub fn PostView(record: PostWithAuthor) -> impl IntoView {
    let PostWithAuthor { post, author } = record;
    let username = author.username.as_deref();
    let profile_href = profile_path(username);
    let author_handle = handle(username);
    let alt = avatar_alt(username);
    let permalink = post_path(&post.id);
    let age = from_now(post.created_at, now());

    view! {
        <article class="post-view">
            <a href=profile_href.clone()>
                <img
                    class="post-view__avatar"
                    src=author.profile_image_url
                    alt=alt
                    width="56"
                    height="56"
                />
            </a>
            <div class="post-view__body">
                <div class="post-view__meta">
                    <a href=profile_href>{author_handle}</a>
                    <a href=permalink>
                        <span class="post-view__dot">"· "</span>
                        <span class="post-view__age">{age}</span>
                    </a>
                </div>
                <span class="post-view__content">{post.content}</span>
            </div>
        </article>
    }
}
