//! # client
//!
//! Leptos + WASM frontend shell. Owns theme resolution, which must run
//! before the UI mounts, plus the root component, the landing page, the
//! theme switch and the survey types shared with the host.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod survey;
pub mod theme;
pub mod util;

/// WASM entry point: resolve the stored theme, then hydrate the SSR markup.
///
/// The head bootstrap script has normally marked the document already; this
/// run reports storage problems and covers pages served without the shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    match theme::browser::init_document_theme() {
        Ok(resolution) => log::debug!(
            "theme applied before hydration: {:?} (initialized: {})",
            resolution.effective,
            resolution.initialized
        ),
        Err(e) => log::warn!("theme init skipped: {e}"),
    }

    leptos::mount::hydrate_body(app::App);
}
