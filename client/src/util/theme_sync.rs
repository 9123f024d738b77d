//! Keeps `UiState` in step with the theme applied to the document.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders default UI state and the resolver marks the document
//! before hydration. Once mounted, the switch labels need the real
//! preference, and an `auto` preference must keep tracking the OS scheme.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::theme::browser;

/// Load the stored theme into `ui` after mount and follow OS scheme changes.
pub fn install_theme_sync(ui: RwSignal<UiState>) {
    Effect::new(move || {
        if let Some((theme, effective)) = browser::current_theme() {
            ui.update(|u| u.set_theme(theme, effective));
        }

        let watching = browser::watch_system_scheme(move |prefers_dark| {
            let state = ui.get_untracked();
            let mut service = browser::theme_service(state.theme, state.effective);
            match service.system_scheme_changed(prefers_dark) {
                Ok(effective) => ui.update(|u| u.effective = effective),
                Err(e) => log::warn!("failed to follow system color scheme: {e}"),
            }
        });
        if !watching {
            log::debug!("system color scheme changes are not observable");
        }
    });
}
