use theme_dropdown::listbox::{Listbox, ListboxEvent, ListboxState};
use theme_dropdown::theme::Theme;

fn themes() -> Listbox<Theme> {
    Listbox::new(&Theme::ALL)
}

#[test]
fn test_starts_closed() {
    let lb = themes();
    assert_eq!(lb.state(), ListboxState::Closed);
    assert!(!lb.is_open());
    assert_eq!(lb.active(), None);
}

#[test]
fn test_open_activates_selected_option() {
    let mut lb = themes();
    assert_eq!(lb.handle(ListboxEvent::Open, Some(Theme::Light)), None);
    assert!(lb.is_open());
    assert_eq!(lb.active(), Some(Theme::Light));
}

#[test]
fn test_open_without_selection_activates_first() {
    let mut lb = themes();
    lb.handle(ListboxEvent::Open, None);
    assert_eq!(lb.active(), Some(Theme::Dark));
}

#[test]
fn test_toggle_opens_then_closes() {
    let mut lb = themes();
    lb.handle(ListboxEvent::Toggle, Some(Theme::System));
    assert_eq!(lb.state(), ListboxState::Open { active: Some(2) });
    lb.handle(ListboxEvent::Toggle, Some(Theme::System));
    assert_eq!(lb.state(), ListboxState::Closed);
}

#[test]
fn test_navigation_clamps_at_ends() {
    let mut lb = themes();
    lb.handle(ListboxEvent::Open, Some(Theme::Dark));

    lb.handle(ListboxEvent::Previous, None);
    assert_eq!(lb.active(), Some(Theme::Dark), "Previous should not wrap");

    lb.handle(ListboxEvent::Next, None);
    lb.handle(ListboxEvent::Next, None);
    lb.handle(ListboxEvent::Next, None);
    assert_eq!(lb.active(), Some(Theme::System), "Next should not wrap");

    lb.handle(ListboxEvent::First, None);
    assert_eq!(lb.active(), Some(Theme::Dark));
    lb.handle(ListboxEvent::Last, None);
    assert_eq!(lb.active(), Some(Theme::System));
}

#[test]
fn test_navigation_ignored_while_closed() {
    let mut lb = themes();
    lb.handle(ListboxEvent::Next, None);
    lb.handle(ListboxEvent::Activate(Theme::Light), None);
    assert_eq!(lb.state(), ListboxState::Closed);
    assert_eq!(lb.handle(ListboxEvent::SelectActive, None), None);
}

#[test]
fn test_hover_activates_and_leave_clears() {
    let mut lb = themes();
    lb.handle(ListboxEvent::Open, Some(Theme::Dark));
    lb.handle(ListboxEvent::Activate(Theme::System), None);
    assert!(lb.is_active(Theme::System));
    assert!(!lb.is_active(Theme::Dark));
    lb.handle(ListboxEvent::Deactivate, None);
    assert_eq!(lb.active(), None);
    assert!(lb.is_open());
}

#[test]
fn test_select_returns_option_and_closes() {
    let mut lb = themes();
    lb.handle(ListboxEvent::Open, None);
    assert_eq!(lb.handle(ListboxEvent::Select(Theme::Light), None), Some(Theme::Light));
    assert!(!lb.is_open());
}

#[test]
fn test_select_active_after_keyboard_moves() {
    let mut lb = themes();
    lb.handle(ListboxEvent::Open, Some(Theme::Dark));
    lb.handle(ListboxEvent::Next, None);
    assert_eq!(lb.handle(ListboxEvent::SelectActive, None), Some(Theme::Light));
    assert_eq!(lb.state(), ListboxState::Closed);
}

#[test]
fn test_select_active_with_nothing_active_stays_open() {
    let mut lb = themes();
    lb.handle(ListboxEvent::Open, None);
    lb.handle(ListboxEvent::Deactivate, None);
    assert_eq!(lb.handle(ListboxEvent::SelectActive, None), None);
    assert!(lb.is_open());
}

#[test]
fn test_key_map_when_closed() {
    for key in ["ArrowDown", "ArrowUp", "Enter", " "] {
        assert_eq!(
            ListboxEvent::<Theme>::from_key(key, false),
            Some(ListboxEvent::Open),
            "Key {:?} should open",
            key
        );
    }
    assert_eq!(ListboxEvent::<Theme>::from_key("Escape", false), None);
    assert_eq!(ListboxEvent::<Theme>::from_key("Home", false), None);
}

#[test]
fn test_key_map_when_open() {
    let cases = [
        ("ArrowDown", ListboxEvent::Next),
        ("ArrowUp", ListboxEvent::Previous),
        ("Home", ListboxEvent::First),
        ("End", ListboxEvent::Last),
        ("Enter", ListboxEvent::SelectActive),
        (" ", ListboxEvent::SelectActive),
        ("Escape", ListboxEvent::Close),
        ("Tab", ListboxEvent::Close),
    ];
    for (key, expected) in cases {
        assert_eq!(ListboxEvent::<Theme>::from_key(key, true), Some(expected), "Key {:?}", key);
    }
    assert_eq!(ListboxEvent::<Theme>::from_key("a", true), None);
}

#[test]
fn test_previous_with_nothing_active_starts_from_last() {
    let mut lb = themes();
    lb.handle(ListboxEvent::Open, Some(Theme::System));
    lb.handle(ListboxEvent::Deactivate, None);
    lb.handle(ListboxEvent::Previous, None);
    assert_eq!(
        lb.active(),
        Some(Theme::System),
        "ArrowUp after the pointer leaves should land on the last option"
    );
}

#[test]
fn test_next_with_nothing_active_starts_from_first() {
    let mut lb = themes();
    lb.handle(ListboxEvent::Open, Some(Theme::Light));
    lb.handle(ListboxEvent::Deactivate, None);
    lb.handle(ListboxEvent::Next, None);
    assert_eq!(lb.active(), Some(Theme::Dark));
}
