//! # client
//!
//! Leptos + WASM storefront for the PaperBook bookstore.
//!
//! This crate contains the route table and guard, the auth session manager
//! and its token store, the REST API boundary, shared client state, and the
//! storefront pages and components. The `paperbook` host crate links it with
//! the `ssr` feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod router;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
