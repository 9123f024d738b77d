//! Theme preference resolution and application.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page must show the right appearance before the UI mounts. The
//! resolution algorithm in `resolver` is pure over three injected
//! capabilities; `browser` binds them to `localStorage`, the document root
//! and `matchMedia`, and `memory` provides in-process stand-ins. `bootstrap`
//! renders the same decision table as a blocking head script so the server
//! rendered page is marked before its first paint, long before WASM loads.

pub mod bootstrap;
pub mod browser;
pub mod memory;
pub mod preference;
pub mod resolver;
pub mod service;

pub use preference::{
    DARK_ATTRIBUTE_VALUE, DARK_SCHEME_QUERY, EffectiveTheme, STORAGE_KEY, StoredPreference, THEME_ATTRIBUTE, ThemePreference,
};
pub use resolver::{ColorSchemeQuery, PreferenceStore, Resolution, ThemeTarget, effective_theme, resolve_theme};
pub use service::ThemeService;

/// Failures raised by theme capabilities. The resolution itself is total.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// No preference store is reachable (no window, storage disabled, SSR).
    #[error("preference storage unavailable")]
    StorageUnavailable,

    /// The store rejected a read or write.
    #[error("preference storage failed: {0}")]
    Storage(String),

    /// No document root element to mark.
    #[error("document root unavailable")]
    DocumentUnavailable,

    /// Setting or removing the theme attribute failed.
    #[error("theme attribute update failed: {0}")]
    Attribute(String),
}
