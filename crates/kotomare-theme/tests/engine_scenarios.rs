//! End-to-end engine scenarios: startup restore, selection, custom themes,
//! and system preference following, each checked against both the engine
//! state and what reached the environment and storage.

use kotomare_theme::{
    CUSTOM_THEME_ID, ColorSlot, CustomThemeConfig, CustomThemeDraft, FixedPreference,
    MemoryStorage, RecordingEnvironment, ThemeEngine, ThemeError, ThemeMode, ThemeStorage,
    catalog,
};

// ── Helpers ─────────────────────────────────────────────────────────────

type Engine = ThemeEngine<MemoryStorage, RecordingEnvironment>;

fn started(storage: MemoryStorage, preference: FixedPreference) -> Engine {
    let mut engine = ThemeEngine::with_defaults(storage, RecordingEnvironment::new());
    assert!(engine.initialize(&preference));
    engine
}

/// Simulate a page reload: carry storage over into a fresh engine.
fn reload(engine: Engine, preference: FixedPreference) -> Engine {
    let (storage, _) = engine.into_parts();
    started(storage, preference)
}

fn persisted_id(engine: &Engine) -> Option<String> {
    engine.storage().get("kotomare-theme").unwrap()
}

// ── Startup ─────────────────────────────────────────────────────────────

#[test]
fn fresh_session_follows_dark_preference() {
    let engine = started(MemoryStorage::new(), FixedPreference::DARK);
    assert_eq!(engine.theme().id, "dark-default");
    assert_eq!(engine.mode(), ThemeMode::Dark);
    assert!(!engine.is_custom_active());
    assert!(engine.environment().reflects(engine.theme()));
    assert_eq!(persisted_id(&engine), None, "startup writes nothing");
}

#[test]
fn fresh_session_follows_light_preference() {
    let engine = started(MemoryStorage::new(), FixedPreference::LIGHT);
    assert_eq!(engine.theme().id, "light-default");
    assert_eq!(engine.environment().mode(), Some(ThemeMode::Light));
}

#[test]
fn persisted_builtin_wins_over_preference() {
    let storage = MemoryStorage::new().with_entry("kotomare-theme", "light-blue");
    let engine = started(storage, FixedPreference::DARK);
    assert_eq!(engine.theme().id, "light-blue");
    assert_eq!(engine.mode(), ThemeMode::Light);
    assert!(!engine.is_custom_active());
    assert!(engine.environment().reflects(&catalog::LIGHT_BLUE));
}

#[test]
fn persisted_custom_theme_is_restored() {
    let storage = MemoryStorage::new()
        .with_entry("kotomare-theme", CUSTOM_THEME_ID)
        .with_entry(
            "kotomare-custom-theme",
            r##"{"mode":"dark","colors":{"primary":"#ff0000"}}"##,
        );
    let engine = started(storage, FixedPreference::LIGHT);

    assert!(engine.is_custom_active());
    assert_eq!(engine.theme().id, CUSTOM_THEME_ID);
    assert_eq!(engine.mode(), ThemeMode::Dark);
    assert_eq!(engine.theme().colors.primary.as_str(), "#ff0000");
    for slot in ColorSlot::ALL {
        if slot != ColorSlot::Primary {
            assert_eq!(
                engine.theme().colors.get(slot),
                catalog::DARK_DEFAULT.colors.get(slot),
                "slot {} should come from the dark default",
                slot.key()
            );
        }
    }
    assert_eq!(engine.environment().variable("--primary"), Some("#ff0000"));
}

#[test]
fn unknown_persisted_id_is_treated_as_no_selection() {
    let storage = MemoryStorage::new().with_entry("kotomare-theme", "dark-neon");
    let mut engine = started(storage, FixedPreference::LIGHT);
    assert_eq!(engine.theme().id, "light-default");
    // The stale id still counts as an explicit choice for preference following.
    assert!(!engine.handle_preference_change(true));
}

// ── Selection ───────────────────────────────────────────────────────────

#[test]
fn every_builtin_id_selects_that_theme() {
    let mut engine = started(MemoryStorage::new(), FixedPreference::DARK);
    for theme in catalog::ALL {
        engine.select_theme(&theme.id).unwrap();
        assert_eq!(engine.theme(), theme);
        assert!(!engine.is_custom_active());
        assert!(engine.environment().reflects(theme));
        assert_eq!(persisted_id(&engine).as_deref(), Some(theme.id()));
    }
}

#[test]
fn unknown_id_leaves_active_theme_unchanged() {
    let mut engine = started(MemoryStorage::new(), FixedPreference::DARK);
    engine.select_theme("light-green").unwrap();
    let applications = engine.environment().applications();

    let err = engine.select_theme("not-a-theme").unwrap_err();
    assert!(matches!(err, ThemeError::UnknownTheme(ref id) if id == "not-a-theme"));
    assert_eq!(engine.theme().id, "light-green");
    assert_eq!(persisted_id(&engine).as_deref(), Some("light-green"));
    assert_eq!(engine.environment().applications(), applications);
}

#[test]
fn toggle_twice_returns_to_original_mode_default() {
    for preference in [FixedPreference::DARK, FixedPreference::LIGHT] {
        let mut engine = started(MemoryStorage::new(), preference);
        let original = engine.mode();
        engine.toggle_mode();
        assert_eq!(engine.mode(), original.toggled());
        engine.toggle_mode();
        assert_eq!(engine.theme(), catalog::default_for(original));
    }
}

#[test]
fn toggle_from_non_default_theme_lands_on_default() {
    let mut engine = started(MemoryStorage::new(), FixedPreference::DARK);
    engine.select_theme("dark-orange").unwrap();
    engine.toggle_mode();
    engine.toggle_mode();
    assert_eq!(engine.theme().id, "dark-default");
}

#[test]
fn selection_survives_reload() {
    let mut engine = started(MemoryStorage::new(), FixedPreference::DARK);
    engine.select_theme("light-rose").unwrap();
    let engine = reload(engine, FixedPreference::DARK);
    assert_eq!(engine.theme().id, "light-rose");
    assert!(!engine.is_custom_active());
}

#[test]
fn custom_selection_survives_reload() {
    let mut engine = started(MemoryStorage::new(), FixedPreference::DARK);
    engine.update_custom_config(Some(
        CustomThemeConfig::new(ThemeMode::Light)
            .with_color(ColorSlot::Secondary, "rgb(10, 20, 30)"),
    ));
    engine.apply_custom_config().unwrap();
    let before = engine.theme().clone();

    let engine = reload(engine, FixedPreference::DARK);
    assert!(engine.is_custom_active());
    assert_eq!(engine.theme(), &before);
}

// ── Custom themes ───────────────────────────────────────────────────────

#[test]
fn update_then_apply_light_custom_theme() {
    let mut engine = started(MemoryStorage::new(), FixedPreference::DARK);
    let config =
        CustomThemeConfig::new(ThemeMode::Light).with_color(ColorSlot::Background, "#eeeeee");
    engine.update_custom_config(Some(config.clone()));
    assert_eq!(engine.theme().id, "dark-default", "update alone does not apply");

    engine.apply_custom_config().unwrap();
    assert!(engine.is_custom_active());
    assert_eq!(engine.mode(), ThemeMode::Light);
    assert_eq!(engine.theme().colors.background.as_str(), "#eeeeee");
    assert_eq!(
        engine.theme().colors.foreground,
        catalog::LIGHT_DEFAULT.colors.foreground
    );
    assert_eq!(engine.custom_config(), Some(&config), "draft unchanged by apply");
    assert_eq!(persisted_id(&engine).as_deref(), Some(CUSTOM_THEME_ID));
    assert_eq!(engine.environment().mode(), Some(ThemeMode::Light));
}

#[test]
fn draft_editing_flow() {
    let mut engine = started(MemoryStorage::new(), FixedPreference::DARK);
    let mut draft = CustomThemeDraft::from_config(engine.custom_config());
    assert_eq!(
        draft.display_value(ColorSlot::Primary, engine.theme()),
        &catalog::DARK_DEFAULT.colors.primary
    );

    engine.update_custom_config(Some(draft.set_color(ColorSlot::Primary, "#00ffaa")));
    engine.update_custom_config(Some(draft.set_mode(ThemeMode::Light)));
    assert_eq!(engine.theme().id, "dark-default");

    engine.select_theme(CUSTOM_THEME_ID).unwrap();
    assert_eq!(engine.mode(), ThemeMode::Light);
    assert_eq!(engine.theme().colors.primary.as_str(), "#00ffaa");
    assert_eq!(
        draft.display_value(ColorSlot::Primary, engine.theme()).as_str(),
        "#00ffaa"
    );
}

#[test]
fn custom_theme_without_draft_is_rejected() {
    let mut engine = started(MemoryStorage::new(), FixedPreference::LIGHT);
    assert!(matches!(
        engine.apply_custom_config(),
        Err(ThemeError::NoCustomConfig)
    ));
    assert!(matches!(
        engine.select_theme(CUSTOM_THEME_ID),
        Err(ThemeError::NoCustomConfig)
    ));
    assert_eq!(engine.theme().id, "light-default");
    assert_eq!(persisted_id(&engine), None);
}

// ── System preference ───────────────────────────────────────────────────

#[test]
fn preference_change_followed_until_explicit_choice() {
    let mut engine = started(MemoryStorage::new(), FixedPreference::DARK);
    assert!(engine.handle_preference_change(false));
    assert_eq!(engine.theme().id, "light-default");
    assert!(engine.handle_preference_change(true));
    assert_eq!(engine.theme().id, "dark-default");
    assert_eq!(persisted_id(&engine), None, "following never persists");

    engine.select_mode(ThemeMode::Dark);
    assert!(!engine.handle_preference_change(false));
    assert_eq!(engine.theme().id, "dark-default");
}

#[test]
fn preference_change_ignored_with_persisted_selection() {
    let storage = MemoryStorage::new().with_entry("kotomare-theme", "dark-red");
    let mut engine = started(storage, FixedPreference::LIGHT);
    assert!(!engine.handle_preference_change(false));
    assert_eq!(engine.theme().id, "dark-red");
}

// ── Snapshot ────────────────────────────────────────────────────────────

#[test]
fn snapshot_tracks_context_state() {
    let mut engine = started(MemoryStorage::new(), FixedPreference::DARK);
    engine.update_custom_config(Some(CustomThemeConfig::new(ThemeMode::Dark)));
    engine.apply_custom_config().unwrap();
    let snapshot = engine.snapshot();
    assert!(snapshot.is_custom_theme);
    assert_eq!(snapshot.mode, ThemeMode::Dark);
    assert_eq!(snapshot.theme.id, CUSTOM_THEME_ID);
    assert_eq!(snapshot.custom_theme, Some(CustomThemeConfig::new(ThemeMode::Dark)));
}
