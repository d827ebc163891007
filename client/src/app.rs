//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::home::HomePage;
use crate::state::auth::{IdentityHandle, SessionIdentity};
use crate::state::query::QueryClient;
use crate::state::toast::Toasts;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the identity provider, the query cache, and the toast service to
/// every page, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let identity = SessionIdentity::new();
    identity.load();
    provide_context::<IdentityHandle>(Arc::new(identity));
    provide_context(QueryClient::new());
    provide_context(Toasts::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/chirp.css"/>
        <Title text="Chirp"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
