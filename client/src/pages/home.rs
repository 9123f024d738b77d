//! Landing page.

use leptos::prelude::*;

use crate::components::theme_switch::ThemeSwitch;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="home__header">
                <h1 class="home__title">"Basic"</h1>
                <span class="home__spacer"></span>
                <ThemeSwitch/>
            </header>
        </div>
    }
}
