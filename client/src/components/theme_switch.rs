//! Button cycling the theme preference through light, dark and auto.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::theme::{ThemePreference, browser};

#[cfg(test)]
#[path = "theme_switch_test.rs"]
mod theme_switch_test;

/// Glyph shown for a preference.
pub(crate) fn theme_icon(theme: ThemePreference) -> &'static str {
    match theme {
        ThemePreference::Light => "☀",
        ThemePreference::Dark => "☾",
        ThemePreference::Auto => "◐",
    }
}

/// Human-readable name for a preference.
pub(crate) fn theme_label(theme: ThemePreference) -> &'static str {
    match theme {
        ThemePreference::Light => "Light",
        ThemePreference::Dark => "Dark",
        ThemePreference::Auto => "Auto",
    }
}

/// Tooltip naming the current and the next preference.
pub(crate) fn theme_title(theme: ThemePreference) -> String {
    format!("Theme: {} (switch to {})", theme_label(theme), theme_label(theme.next()))
}

/// Theme switch button.
#[component]
pub fn ThemeSwitch() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        let state = ui.get_untracked();
        let mut service = browser::theme_service(state.theme, state.effective);
        match service.cycle() {
            Ok(effective) => {
                let theme = service.preference();
                ui.update(|u| u.set_theme(theme, effective));
            }
            Err(e) => {
                log::warn!("theme switch failed: {e}");
                let (theme, effective) = (service.preference(), service.effective());
                ui.update(|u| u.set_theme(theme, effective));
            }
        }
    };

    view! {
        <button
            class="btn theme-switch"
            class:theme-switch--dark=move || ui.get().is_dark()
            on:click=on_click
            title=move || theme_title(ui.get().theme)
        >
            <span class="theme-switch__icon">{move || theme_icon(ui.get().theme)}</span>
            <span class="theme-switch__label">{move || theme_label(ui.get().theme)}</span>
        </button>
    }
}
