//! # jacferdi-client
//!
//! Leptos + WASM frontend for the Jacferdi Studios voice shopping session.
//! Pairs the realtime assistant transcript (with its transient greeting
//! overlay) with the product catalog, cart, and order placement. The
//! realtime transport itself is owned by the session SDK; this crate renders
//! the state it populates.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::hydrate_body(crate::app::App);
}
