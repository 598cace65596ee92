//! Theme picker dropdown.
//!
//! A button showing the icon for the current theme, opening a listbox of
//! dark / light / system. Selection is persisted and applied to `<html>`
//! through [`BrowserThemeController`].

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::theme_icon::ThemeIcon;
use crate::config::ThemeConfig;
use crate::controller::BrowserThemeController;
use crate::listbox::{Listbox, ListboxEvent};
use crate::theme::Theme;

fn option_id(theme: Theme) -> String {
    format!("theme-option-{}", theme.as_str())
}

/// Focus goes back to the button when the popup closes, except on Tab,
/// which moves focus itself.
fn returns_focus(was_open: bool, is_open: bool, from_tab: bool) -> bool {
    was_open && !is_open && !from_tab
}

#[component]
pub fn ThemeDropdown(
    /// Storage key and media query overrides.
    #[prop(optional)]
    config: Option<ThemeConfig>,
) -> impl IntoView {
    let controller = StoredValue::new(BrowserThemeController::browser(
        config.unwrap_or_default(),
    ));
    let (theme, set_theme) = signal(Theme::System);
    let listbox = RwSignal::new(Listbox::new(&Theme::ALL));

    // Load saved theme preference on mount
    Effect::new(move |_| {
        if let Some(saved) = controller.try_update_value(|c| c.mount()) {
            set_theme.set(saved);
        }
    });

    let choose = move |choice: Theme| {
        if let Some(applied) = controller.try_update_value(|c| c.select(choice)) {
            set_theme.set(applied);
        }
    };

    let button_ref = NodeRef::<leptos::html::Button>::new();

    let dispatch = move |event: ListboxEvent<Theme>, from_tab: bool| {
        let selected = Some(theme.get_untracked());
        let Some((chosen, was_open, is_open)) = listbox.try_update(|lb| {
            let was_open = lb.is_open();
            let chosen = lb.handle(event, selected);
            (chosen, was_open, lb.is_open())
        }) else {
            return;
        };

        if returns_focus(was_open, is_open, from_tab) {
            if let Some(button) = button_ref.get_untracked() {
                let _ = button.focus();
            }
        }
        if let Some(choice) = chosen {
            choose(choice);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let key = ev.key();
        let is_open = listbox.with_untracked(|lb| lb.is_open());
        if let Some(event) = ListboxEvent::from_key(&key, is_open) {
            let from_tab = key == "Tab";
            if !from_tab {
                ev.prevent_default();
            }
            dispatch(event, from_tab);
        }
    };

    // Move focus into the popup when it opens so arrow keys land there
    let options_ref = NodeRef::<leptos::html::Ul>::new();
    Effect::new(move |_| {
        if let Some(list) = options_ref.get() {
            let _ = list.focus();
        }
    });

    // Close the popup when pressing outside the control
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let outside_listener = window_event_listener(leptos::ev::mousedown, move |ev| {
        let Some(container) = container_ref.get_untracked() else {
            return;
        };
        let outside = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .map_or(false, |node| !container.contains(Some(&node)));
        if outside && listbox.try_with_untracked(|lb| lb.is_open()).unwrap_or(false) {
            listbox.update(|lb| {
                lb.handle(ListboxEvent::Close, None);
            });
        }
    });
    on_cleanup(move || outside_listener.remove());

    view! {
        <div
            class="theme-dropdown"
            class:open=move || listbox.with(|lb| lb.is_open())
            node_ref=container_ref
            on:keydown=on_keydown
        >
            <style>{include_str!("theme_dropdown.css")}</style>

            <button
                type="button"
                class="theme-dropdown-button"
                aria-haspopup="listbox"
                aria-expanded=move || listbox.with(|lb| lb.is_open()).to_string()
                aria-label=move || format!("Theme: {}", theme.get().label())
                on:click=move |_| dispatch(ListboxEvent::Toggle, false)
                node_ref=button_ref
            >
                <ThemeIcon theme=theme />
            </button>

            <Show when=move || listbox.with(|lb| lb.is_open())>
                <ul
                    class="theme-options"
                    role="listbox"
                    tabindex="-1"
                    node_ref=options_ref
                    aria-activedescendant=move || listbox.with(|lb| lb.active().map(option_id))
                >
                    {Theme::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <li
                                    id=option_id(option)
                                    role="option"
                                    class="theme-option"
                                    class:selected=move || theme.get() == option
                                    class:active=move || listbox.with(|lb| lb.is_active(option))
                                    aria-selected=move || (theme.get() == option).to_string()
                                    on:mouseenter=move |_| dispatch(ListboxEvent::Activate(option), false)
                                    on:mouseleave=move |_| dispatch(ListboxEvent::Deactivate, false)
                                    on:click=move |_| dispatch(ListboxEvent::Select(option), false)
                                >
                                    <span class="theme-option-label">{option.label()}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>
        </div>
    }
}
