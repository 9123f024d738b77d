//! Runtime theme changes after startup.
//!
//! DESIGN
//! ======
//! The resolver only ever sets the dark marker. Once the user can pick a
//! theme the marker must also come off again, so the service applies both
//! directions and persists every explicit choice.

use super::ThemeError;
use super::preference::{EffectiveTheme, STORAGE_KEY, StoredPreference, THEME_ATTRIBUTE, ThemePreference};
use super::resolver::{ColorSchemeQuery, PreferenceStore, Resolution, ThemeTarget, effective_theme};

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

/// Persists and applies user theme choices.
#[derive(Debug)]
pub struct ThemeService<S, T, Q> {
    store: S,
    target: T,
    scheme: Q,
    preference: ThemePreference,
    effective: EffectiveTheme,
}

impl<S, T, Q> ThemeService<S, T, Q>
where
    S: PreferenceStore,
    T: ThemeTarget,
    Q: ColorSchemeQuery,
{
    /// Service seeded with the currently applied state.
    pub fn new(store: S, target: T, scheme: Q, preference: ThemePreference, effective: EffectiveTheme) -> Self {
        Self { store, target, scheme, preference, effective }
    }

    /// Service continuing from a resolver run.
    pub fn from_resolution(store: S, target: T, scheme: Q, resolution: &Resolution) -> Self {
        Self::new(store, target, scheme, resolution.preference(), resolution.effective)
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn effective(&self) -> EffectiveTheme {
        self.effective
    }

    /// Persist `preference` and apply the resulting theme.
    ///
    /// The new preference is committed only once both the store write and the
    /// document update succeed. If the document update fails the store is
    /// restored to the previous preference.
    ///
    /// # Errors
    ///
    /// Store and attribute failures leave the preference and the effective
    /// theme unchanged.
    pub fn set_preference(&mut self, preference: ThemePreference) -> Result<EffectiveTheme, ThemeError> {
        let previous = self.preference;
        self.store.set(STORAGE_KEY, preference.as_str())?;

        let effective = effective_theme(&StoredPreference::Known(preference), || self.scheme.prefers_dark());
        if let Err(e) = self.apply(effective) {
            if let Err(restore) = self.store.set(STORAGE_KEY, previous.as_str()) {
                log::warn!("failed to restore theme preference {previous}: {restore}");
            }
            return Err(e);
        }

        self.preference = preference;
        log::debug!("theme preference set to {preference} ({effective:?})");
        Ok(effective)
    }

    /// Advance to the next preference in the switch order.
    ///
    /// # Errors
    ///
    /// See [`ThemeService::set_preference`].
    pub fn cycle(&mut self) -> Result<EffectiveTheme, ThemeError> {
        self.set_preference(self.preference.next())
    }

    /// Follow an OS color-scheme change. Only `auto` reacts.
    ///
    /// # Errors
    ///
    /// Propagates attribute update failures.
    pub fn system_scheme_changed(&mut self, prefers_dark: bool) -> Result<EffectiveTheme, ThemeError> {
        if self.preference != ThemePreference::Auto {
            return Ok(self.effective);
        }
        let effective = if prefers_dark { EffectiveTheme::Dark } else { EffectiveTheme::Light };
        self.apply(effective)
    }

    fn apply(&mut self, effective: EffectiveTheme) -> Result<EffectiveTheme, ThemeError> {
        match effective.attribute_value() {
            Some(value) => self.target.set_attribute(THEME_ATTRIBUTE, value)?,
            None => self.target.remove_attribute(THEME_ATTRIBUTE)?,
        }
        self.effective = effective;
        Ok(effective)
    }
}
