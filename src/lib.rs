//! Access.Able - Universal Design AI app builder
//!
//! Landing page for an AI app builder, built with Leptos and WebAssembly.
//! The prompt input cycles example ideas through its placeholder with a
//! typing animation (see [`core::typing_animation`]).

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
