//! # portfolio-client
//!
//! Leptos + WASM frontend for the photography portfolio page. Every page
//! behavior (theme toggle, quote rotation, countdown clock, year stamp,
//! search redirect, image fade-in) is a component owning its own timer
//! handle and reading the environment through the `pagefx` capability
//! traits.
//!
//! Browser APIs are only touched behind the `web` feature, so the crate
//! compiles and unit-tests on the host with default features.

pub mod app;
pub mod components;
pub mod pages;
pub mod util;

/// WASM entry point: apply the resolved theme before anything renders,
/// then mount the application.
#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    // Theme first: the marker class must be on the root element before
    // first paint to avoid a flash of the wrong theme.
    let theme = util::browser::resolve_theme();
    util::browser::apply_theme(theme);

    leptos::mount::mount_to_body(app::App);
}
