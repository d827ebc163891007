//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the forwarded API surface and stitches it with Leptos
//! SSR rendering under a single Axum router. The WASM bundle and stylesheet
//! are served from `/pkg`.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Routes relayed to the upstream plus the health probe.
pub(crate) fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/trpc/{*procedure}", any(proxy::forward))
        .route("/api/auth/{*rest}", any(proxy::forward))
        .route("/sign-in", get(proxy::forward))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Leptos SSR frontend: forwarded API routes + the home page + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` / `LEPTOS_*` settings).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
