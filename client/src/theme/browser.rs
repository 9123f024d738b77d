//! Browser-backed theme capabilities.
//!
//! Binds the resolver to `localStorage`, `document.documentElement` and
//! `matchMedia`. Requires a browser environment; without the `hydrate`
//! feature storage reports unavailable, the document is missing and the
//! system scheme reads light, keeping server rendering deterministic.

use super::ThemeError;
use super::preference::{EffectiveTheme, STORAGE_KEY, StoredPreference, ThemePreference};
use super::resolver::{ColorSchemeQuery, PreferenceStore, Resolution, ThemeTarget, effective_theme, resolve_theme};
use super::service::ThemeService;

#[cfg(feature = "hydrate")]
use super::preference::DARK_SCHEME_QUERY;

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Theme service bound to the browser capabilities.
pub type BrowserThemeService = ThemeService<LocalStorage, DocumentRoot, MediaColorScheme>;

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

/// `document.documentElement`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

/// `window.matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaColorScheme;

#[cfg(feature = "hydrate")]
fn storage() -> Result<web_sys::Storage, ThemeError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(ThemeError::StorageUnavailable)
}

#[cfg(feature = "hydrate")]
fn root_element() -> Result<web_sys::Element, ThemeError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
        .ok_or(ThemeError::DocumentUnavailable)
}

#[cfg(feature = "hydrate")]
fn media_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()
}

#[cfg(feature = "hydrate")]
fn js_message(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?
                .get_item(key)
                .map_err(|e| ThemeError::Storage(js_message(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(ThemeError::StorageUnavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?
                .set_item(key, value)
                .map_err(|e| ThemeError::Storage(js_message(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(ThemeError::StorageUnavailable)
        }
    }
}

impl ThemeTarget for DocumentRoot {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            root_element()?
                .set_attribute(name, value)
                .map_err(|e| ThemeError::Attribute(js_message(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, value);
            Err(ThemeError::DocumentUnavailable)
        }
    }

    fn remove_attribute(&self, name: &str) -> Result<(), ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            root_element()?
                .remove_attribute(name)
                .map_err(|e| ThemeError::Attribute(js_message(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
            Err(ThemeError::DocumentUnavailable)
        }
    }
}

impl ColorSchemeQuery for MediaColorScheme {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            media_query().map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

/// Resolve the stored preference onto the live document.
///
/// Call once before mounting the UI.
///
/// # Errors
///
/// Returns the capability failure when storage or the document is unreachable.
pub fn init_document_theme() -> Result<Resolution, ThemeError> {
    resolve_theme(&LocalStorage, &DocumentRoot, &MediaColorScheme)
}

/// Read the current preference and its effective theme without writing.
///
/// Returns `None` when storage is unavailable. An absent value reads as the
/// default preference.
pub fn current_theme() -> Option<(ThemePreference, EffectiveTheme)> {
    let stored = LocalStorage
        .get(STORAGE_KEY)
        .ok()?
        .map_or(StoredPreference::Known(ThemePreference::default()), StoredPreference::from_raw);
    let effective = effective_theme(&stored, || MediaColorScheme.prefers_dark());
    Some((stored.known().unwrap_or(ThemePreference::Light), effective))
}

/// Theme service over the browser capabilities, seeded with known state.
pub fn theme_service(preference: ThemePreference, effective: EffectiveTheme) -> BrowserThemeService {
    ThemeService::new(LocalStorage, DocumentRoot, MediaColorScheme, preference, effective)
}

/// Invoke `on_change` with the new dark flag whenever the OS scheme flips.
///
/// Returns `false` when no media query is available to observe. The listener
/// lives for the rest of the page.
pub fn watch_system_scheme<F>(on_change: F) -> bool
where
    F: Fn(bool) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(mq) = media_query() else {
            return false;
        };
        let cb = Closure::wrap(Box::new(move |ev: web_sys::MediaQueryListEvent| {
            on_change(ev.matches());
        }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);
        if mq
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
            .is_err()
        {
            return false;
        }
        cb.forget();
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_change;
        false
    }
}
