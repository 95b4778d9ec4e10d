//! Property-based tests for custom theme materialization and engine state.
//!
//! 1. **Override wins**: every non-blank override appears in the merged
//!    theme; every other slot equals the base mode default.
//! 2. **Totality**: the merged theme never has a blank slot.
//! 3. **Empty override**: reproduces the mode default palette exactly.
//! 4. **Persistence**: any JSON-encoded config decodes to the same config.
//! 5. **Selection sequences**: after any sequence of operations the
//!    environment reflects the active theme, and a reload restores it.

use kotomare_theme::{
    ColorSlot, CssColor, CustomThemeConfig, FixedPreference, MemoryStorage,
    PartialThemeColors, RecordingEnvironment, ThemeEngine, ThemeMode, catalog, materialize,
};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_mode() -> impl Strategy<Value = ThemeMode> {
    prop_oneof![Just(ThemeMode::Dark), Just(ThemeMode::Light)]
}

fn arb_slot() -> impl Strategy<Value = ColorSlot> {
    (0..ColorSlot::ALL.len()).prop_map(|i| ColorSlot::ALL[i])
}

fn arb_color() -> impl Strategy<Value = String> {
    prop_oneof![
        "#[0-9a-f]{6}",
        "#[0-9A-F]{3}",
        (0u8..=255, 0u8..=255, 0u8..=255).prop_map(|(r, g, b)| format!("rgb({r}, {g}, {b})")),
        Just(String::new()),
        Just("   ".to_string()),
    ]
}

fn arb_overrides() -> impl Strategy<Value = Vec<(ColorSlot, String)>> {
    prop::collection::vec((arb_slot(), arb_color()), 0..24)
}

fn build_partial(overrides: &[(ColorSlot, String)]) -> PartialThemeColors {
    let mut partial = PartialThemeColors::new();
    for (slot, color) in overrides {
        partial.set(*slot, CssColor::new(color.clone()));
    }
    partial
}

#[derive(Debug, Clone)]
enum Op {
    Select(usize),
    SelectUnknown,
    SelectMode(ThemeMode),
    Toggle,
    UpdateCustom(ThemeMode, Vec<(ColorSlot, String)>),
    ClearCustom,
    ApplyCustom,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..catalog::theme_count()).prop_map(Op::Select),
        Just(Op::SelectUnknown),
        arb_mode().prop_map(Op::SelectMode),
        Just(Op::Toggle),
        (arb_mode(), arb_overrides()).prop_map(|(m, o)| Op::UpdateCustom(m, o)),
        Just(Op::ClearCustom),
        Just(Op::ApplyCustom),
    ]
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn overrides_win_and_rest_is_base(mode in arb_mode(), overrides in arb_overrides()) {
        let partial = build_partial(&overrides);
        let theme = materialize(mode, &partial);
        let base = catalog::default_for(mode);

        prop_assert_eq!(theme.mode, mode);
        prop_assert!(theme.is_custom());
        for slot in ColorSlot::ALL {
            match partial.get(slot) {
                Some(color) => {
                    prop_assert_eq!(theme.colors.get(slot), color);
                }
                None => {
                    prop_assert_eq!(theme.colors.get(slot), base.colors.get(slot));
                }
            }
        }
    }

    #[test]
    fn materialized_theme_is_complete(mode in arb_mode(), overrides in arb_overrides()) {
        let theme = materialize(mode, &build_partial(&overrides));
        prop_assert!(theme.colors.is_complete(), "blank slots: {:?}", theme.colors.blank_slots());
    }

    #[test]
    fn empty_override_reproduces_default(mode in arb_mode()) {
        let theme = materialize(mode, &PartialThemeColors::new());
        prop_assert_eq!(&theme.colors, &catalog::default_for(mode).colors);
    }

    #[test]
    fn custom_config_json_is_stable(mode in arb_mode(), overrides in arb_overrides()) {
        let config = CustomThemeConfig { mode, colors: build_partial(&overrides) };
        let json = config.to_json_string().unwrap();
        let decoded = CustomThemeConfig::from_json_str(&json).unwrap();
        prop_assert_eq!(decoded.materialize(), config.materialize());
        prop_assert_eq!(decoded, config);
    }

    #[test]
    fn operation_sequences_keep_environment_in_sync(
        ops in prop::collection::vec(arb_op(), 1..32),
        prefers_dark in any::<bool>(),
    ) {
        let mut engine = ThemeEngine::with_defaults(MemoryStorage::new(), RecordingEnvironment::new());
        engine.initialize(&FixedPreference(ThemeMode::from_prefers_dark(prefers_dark)));

        for op in ops {
            let before = engine.theme().clone();
            match op {
                Op::Select(i) => {
                    let theme = catalog::ALL[i];
                    prop_assert!(engine.select_theme(&theme.id).is_ok());
                    prop_assert_eq!(engine.theme(), theme);
                }
                Op::SelectUnknown => {
                    prop_assert!(engine.select_theme("no-such-theme").is_err());
                    prop_assert_eq!(engine.theme(), &before);
                }
                Op::SelectMode(mode) => {
                    engine.select_mode(mode);
                    prop_assert_eq!(engine.theme(), catalog::default_for(mode));
                }
                Op::Toggle => {
                    engine.toggle_mode();
                    prop_assert_eq!(engine.mode(), before.mode.toggled());
                }
                Op::UpdateCustom(mode, overrides) => {
                    engine.update_custom_config(Some(CustomThemeConfig {
                        mode,
                        colors: build_partial(&overrides),
                    }));
                    prop_assert_eq!(engine.theme(), &before);
                }
                Op::ClearCustom => {
                    engine.update_custom_config(None);
                    prop_assert_eq!(engine.theme(), &before);
                }
                Op::ApplyCustom => {
                    let had_draft = engine.custom_config().is_some();
                    prop_assert_eq!(engine.apply_custom_config().is_ok(), had_draft);
                    prop_assert_eq!(engine.is_custom_active(), had_draft || before.is_custom());
                }
            }
            prop_assert!(engine.environment().reflects(engine.theme()));
            prop_assert_eq!(engine.is_custom_active(), engine.theme().is_custom());
        }

        let expected = engine.theme().clone();
        let explicit = engine.storage().contains_key("kotomare-theme");
        let (storage, _) = engine.into_parts();
        let mut reloaded = ThemeEngine::with_defaults(storage, RecordingEnvironment::new());
        reloaded.initialize(&FixedPreference(ThemeMode::from_prefers_dark(prefers_dark)));
        if explicit {
            if expected.is_custom() && reloaded.custom_config().is_none() {
                // Draft cleared after applying: nothing left to restore.
                prop_assert_eq!(reloaded.theme(), catalog::default_for(ThemeMode::from_prefers_dark(prefers_dark)));
            } else if expected.is_custom() {
                prop_assert!(reloaded.is_custom_active());
            } else {
                prop_assert_eq!(reloaded.theme(), &expected);
            }
        }
    }
}
