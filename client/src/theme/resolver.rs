//! Pre-render theme resolution.
//!
//! Reads the persisted preference once, initializes it to `auto` when absent,
//! and marks the document root dark when the effective theme is dark. Light
//! is expressed by leaving the attribute alone, so resolution only ever sets.

use super::ThemeError;
use super::preference::{EffectiveTheme, STORAGE_KEY, StoredPreference, THEME_ATTRIBUTE, ThemePreference};

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

/// Durable string key-value store scoped to the origin.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// Element whose attributes drive the stylesheets.
pub trait ThemeTarget {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError>;
    fn remove_attribute(&self, name: &str) -> Result<(), ThemeError>;
}

/// OS/UA color-scheme signal.
pub trait ColorSchemeQuery {
    fn prefers_dark(&self) -> bool;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        (**self).set(key, value)
    }
}

impl<T: ThemeTarget + ?Sized> ThemeTarget for &T {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        (**self).set_attribute(name, value)
    }

    fn remove_attribute(&self, name: &str) -> Result<(), ThemeError> {
        (**self).remove_attribute(name)
    }
}

impl<T: ColorSchemeQuery + ?Sized> ColorSchemeQuery for &T {
    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }
}

/// Outcome of a resolver run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Store content after the run.
    pub stored: StoredPreference,
    pub effective: EffectiveTheme,
    /// `true` when the store was empty and `auto` was written.
    pub initialized: bool,
}

impl Resolution {
    /// Preference to present in the UI; unrecognized values read as light.
    pub fn preference(&self) -> ThemePreference {
        self.stored.known().unwrap_or(ThemePreference::Light)
    }
}

/// Effective theme for a stored value. `prefers_dark` is only consulted for `auto`.
pub fn effective_theme(stored: &StoredPreference, prefers_dark: impl FnOnce() -> bool) -> EffectiveTheme {
    match stored {
        StoredPreference::Known(ThemePreference::Dark) => EffectiveTheme::Dark,
        StoredPreference::Known(ThemePreference::Auto) if prefers_dark() => EffectiveTheme::Dark,
        _ => EffectiveTheme::Light,
    }
}

/// Resolve the persisted preference and apply it to `target`.
///
/// One store read, at most one store write (only when empty), at most one
/// attribute set. Running it again with the same inputs changes nothing.
///
/// # Errors
///
/// Propagates store and attribute failures from the capabilities.
pub fn resolve_theme<S, T, Q>(store: &S, target: &T, scheme: &Q) -> Result<Resolution, ThemeError>
where
    S: PreferenceStore + ?Sized,
    T: ThemeTarget + ?Sized,
    Q: ColorSchemeQuery + ?Sized,
{
    let (stored, initialized) = match store.get(STORAGE_KEY)? {
        Some(raw) => (StoredPreference::from_raw(raw), false),
        None => {
            let pref = ThemePreference::Auto;
            store.set(STORAGE_KEY, pref.as_str())?;
            (StoredPreference::Known(pref), true)
        }
    };

    let effective = effective_theme(&stored, || scheme.prefers_dark());
    if let Some(value) = effective.attribute_value() {
        target.set_attribute(THEME_ATTRIBUTE, value)?;
    }

    if let StoredPreference::Unrecognized(raw) = &stored {
        log::debug!("unrecognized theme preference {raw:?}; rendering light");
    }
    log::debug!("theme resolved: stored={stored:?} effective={effective:?} initialized={initialized}");

    Ok(Resolution { stored, effective, initialized })
}
