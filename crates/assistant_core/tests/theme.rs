use assistant_core::{update, AppState, Effect, Msg, Theme};

fn init_logging() {
    assistant_logging::initialize_for_tests();
}

#[test]
fn resolve_applies_stored_preference_and_mounts() {
    init_logging();
    let state = AppState::new();
    assert!(!state.view().mounted);

    let (mut state, effects) = update(state, Msg::ThemeResolved(Some(Theme::Dark)));

    assert!(effects.is_empty());
    assert!(state.view().mounted);
    assert_eq!(state.view().theme, Theme::Dark);
    // Exactly one render pass becomes due at mount.
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn resolve_without_stored_value_falls_back_to_light() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::ThemeResolved(None));

    assert!(state.view().mounted);
    assert_eq!(state.view().theme, Theme::Light);
}

#[test]
fn resolve_is_one_shot() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::ThemeResolved(Some(Theme::Dark)));
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::ThemeResolved(Some(Theme::Light)));

    assert!(effects.is_empty());
    assert_eq!(state.view().theme, Theme::Dark);
    assert!(!state.consume_dirty());
}

#[test]
fn toggle_flips_and_persists() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::ThemeResolved(Some(Theme::Light)));

    let (state, effects) = update(state, Msg::ThemeToggled);

    assert_eq!(state.view().theme, Theme::Dark);
    assert_eq!(effects, vec![Effect::PersistTheme { theme: Theme::Dark }]);
}

#[test]
fn double_toggle_is_a_net_noop_with_two_writes() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::ThemeResolved(Some(Theme::Light)));

    let (state, first) = update(state, Msg::ThemeToggled);
    let (state, second) = update(state, Msg::ThemeToggled);

    assert_eq!(state.view().theme, Theme::Light);
    assert_eq!(first, vec![Effect::PersistTheme { theme: Theme::Dark }]);
    assert_eq!(second, vec![Effect::PersistTheme { theme: Theme::Light }]);
}

#[test]
fn toggle_before_mount_is_ignored() {
    init_logging();
    let state = AppState::new();
    let before = state.view();

    let (state, effects) = update(state, Msg::ThemeToggled);

    assert!(effects.is_empty());
    assert_eq!(state.view(), before);
}

#[test]
fn nothing_is_dirty_before_resolve() {
    init_logging();
    let mut state = AppState::new();
    assert!(!state.consume_dirty());
    assert!(!state.view().mounted);
}

#[test]
fn theme_names_round_trip() {
    assert_eq!(Theme::from_name(Theme::Light.name()), Some(Theme::Light));
    assert_eq!(Theme::from_name(Theme::Dark.name()), Some(Theme::Dark));
    assert_eq!(Theme::from_name("solarized"), None);
}
