//! Blocking head script applying the stored theme before first paint.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server cannot see `localStorage`, so SSR markup always arrives light.
//! WASM hydration runs far too late to avoid a light flash, so the shell
//! inlines this script at the top of `<head>`. It follows the same table as
//! `resolver::resolve_theme`: initialize an absent value to `auto`, mark the
//! root for `dark`, and for `auto` when the OS prefers dark. `hydrate()`
//! repeats the resolution in Rust; both runs only ever set the same marker,
//! so the second one is a no-op on the document.

use leptos::prelude::*;

use super::preference::{DARK_ATTRIBUTE_VALUE, DARK_SCHEME_QUERY, STORAGE_KEY, THEME_ATTRIBUTE, ThemePreference};

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

/// Quote `raw` as a JavaScript string literal safe inside `<script>`.
fn js_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('"');
    for ch in raw.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '<' => out.push_str("\\u003c"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// Source of the pre-paint script.
pub fn pre_paint_script() -> String {
    let key = js_string(STORAGE_KEY);
    let auto = js_string(ThemePreference::Auto.as_str());
    let dark = js_string(ThemePreference::Dark.as_str());
    let query = js_string(DARK_SCHEME_QUERY);
    let attribute = js_string(THEME_ATTRIBUTE);
    let value = js_string(DARK_ATTRIBUTE_VALUE);

    format!(
        "(function(){{\
var s=window.localStorage;\
var t=s.getItem({key});\
if(t===null){{t={auto};s.setItem({key},t);}}\
if(t==={dark}||(t==={auto}&&window.matchMedia({query}).matches)){{\
document.documentElement.setAttribute({attribute},{value});\
}}\
}})();"
    )
}

/// Inline `<script>` element carrying [`pre_paint_script`].
///
/// Must be the first child of `<head>`, ahead of stylesheets and the
/// hydration scripts.
#[component]
pub fn ThemeBootstrap() -> impl IntoView {
    view! { <script id="theme-bootstrap" inner_html=pre_paint_script()></script> }
}
