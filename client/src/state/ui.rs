//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Mirrors the theme applied to the document so controls can render the
//! current choice. The document attribute stays the source of truth for
//! styling; this state only drives labels.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::theme::{EffectiveTheme, ThemePreference};

/// UI state shared through Leptos context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Preference shown by the theme switch.
    pub theme: ThemePreference,
    /// Theme currently applied to the document root.
    pub effective: EffectiveTheme,
}

impl UiState {
    /// Record a preference change and its applied result.
    pub fn set_theme(&mut self, theme: ThemePreference, effective: EffectiveTheme) {
        self.theme = theme;
        self.effective = effective;
    }

    pub fn is_dark(&self) -> bool {
        self.effective.is_dark()
    }
}
