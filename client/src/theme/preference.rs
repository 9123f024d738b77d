//! Theme preference values and their persisted/rendered forms.
//!
//! DESIGN
//! ======
//! The store holds a plain string. Known values map onto `ThemePreference`;
//! anything else is kept verbatim as `StoredPreference::Unrecognized` so it is
//! never overwritten and simply renders as light.
//!
//! `ThemePreference` also serializes to the same lowercase strings, so JSON
//! payloads and server functions carry exactly the values found in storage.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// Key under which the preference is persisted.
pub const STORAGE_KEY: &str = "theme";

/// Root element attribute consumed by the stylesheets.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// `data-theme` value marking a dark document.
pub const DARK_ATTRIBUTE_VALUE: &str = "dark";

/// Media query reporting an OS/UA dark color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// User-selected appearance mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the OS color scheme.
    #[default]
    Auto,
}

impl ThemePreference {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::Auto];

    /// Parse a persisted value. Matching is exact: `"Dark"` is not `dark`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    /// Next value in the switch cycle: light, dark, auto.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Auto,
            Self::Auto => Self::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw content of the preference store once a value is present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredPreference {
    Known(ThemePreference),
    Unrecognized(String),
}

impl StoredPreference {
    pub fn from_raw(raw: String) -> Self {
        match ThemePreference::parse(&raw) {
            Some(pref) => Self::Known(pref),
            None => Self::Unrecognized(raw),
        }
    }

    /// The known preference, if any.
    pub fn known(&self) -> Option<ThemePreference> {
        match self {
            Self::Known(pref) => Some(*pref),
            Self::Unrecognized(_) => None,
        }
    }
}

/// Appearance actually rendered after resolving `auto`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EffectiveTheme {
    #[default]
    Light,
    Dark,
}

impl EffectiveTheme {
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Value of `data-theme`; light is expressed by leaving it unset.
    pub fn attribute_value(self) -> Option<&'static str> {
        match self {
            Self::Light => None,
            Self::Dark => Some(DARK_ATTRIBUTE_VALUE),
        }
    }
}
