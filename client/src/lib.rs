//! # client
//!
//! Leptos + WASM frontend for the Chirp home page: a post composer for
//! signed-in users above the shared feed.
//!
//! This crate contains the page, its components, the state models behind
//! them (identity, composer, query cache, toasts), and the tRPC-over-HTTP
//! client for the posts API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
