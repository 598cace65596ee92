use leptos::prelude::*;

use crate::theme::Theme;

/// Sun, moon or half-disc glyph for the given theme.
#[component]
pub fn ThemeIcon(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    move || match theme.get() {
        Theme::Dark => view! {
            <span class="theme-icon" data-theme-icon="dark">
                <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20" aria-hidden="true">
                    <path
                        fill="currentColor"
                        d="M17.293 13.293A8 8 0 016.707 2.707a8.001 8.001 0 1010.586 10.586z"
                    />
                </svg>
            </span>
        }
        .into_any(),
        Theme::Light => view! {
            <span class="theme-icon" data-theme-icon="light">
                <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" aria-hidden="true">
                    <path
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        d="M12 3v2.25m6.364.386l-1.591 1.591M21 12h-2.25m-.386 6.364l-1.591-1.591M12 18.75V21m-4.773-4.227l-1.591 1.591M5.25 12H3m4.227-4.773L5.636 5.636M15.75 12a3.75 3.75 0 11-7.5 0 3.75 3.75 0 017.5 0z"
                    />
                </svg>
            </span>
        }
        .into_any(),
        Theme::System => view! {
            <span class="theme-icon" data-theme-icon="system">
                <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20" aria-hidden="true">
                    <path
                        fill="currentColor"
                        d="M10 3.5a6.5 6.5 0 1 1 0 13v-13ZM10 2a8 8 0 1 0 0 16a8 8 0 0 0 0-16Z"
                    />
                </svg>
            </span>
        }
        .into_any(),
    }
}
