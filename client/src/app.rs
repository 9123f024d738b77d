//! Root application component with routing and context providers.
//!
//! The server renders the document without `data-theme`, i.e. light. The
//! first thing in `<head>` is the blocking theme bootstrap script, which marks
//! the root from `localStorage` before anything paints. `crate::hydrate` runs
//! the Rust resolver again once WASM is up.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::ui::UiState;
use crate::theme::bootstrap::ThemeBootstrap;
use crate::util::theme_sync::install_theme_sync;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Classes bound on the app root wrapper so it fills the viewport.
///
/// The wrapper sits inside `<body>`, so `h-full` only resolves when `html` and
/// `body` are themselves full height; `style/main.css` sets both to `100%`.
pub const APP_ROOT_CLASS: &str = "h-full block";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <ThemeBootstrap/>
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
/// Provides the shared UI state and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);
    install_theme_sync(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/appshell.css"/>
        <Title text="Basic"/>

        <div class=APP_ROOT_CLASS>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </Router>
        </div>
    }
}
