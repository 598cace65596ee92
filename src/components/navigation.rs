use leptos::prelude::*;

use crate::components::theme_dropdown::ThemeDropdown;
use crate::config;

#[component]
pub fn Navigation() -> impl IntoView {
    let config = config::load_from_document();

    view! {
        <nav class="navigation">
            <a href="/" class="navigation-title">"Theme Dropdown"</a>
            <ThemeDropdown config=config />
        </nav>
    }
}
