#![forbid(unsafe_code)]

//! User-authored custom themes.
//!
//! A [`CustomThemeConfig`] is a base mode plus a sparse set of slot
//! overrides. [`materialize`] merges it onto the mode default so the result
//! is always a complete [`Theme`], however few slots the user touched.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog;
use crate::color::{ColorSlot, CssColor, PartialThemeColors};
use crate::error::ThemeError;
use crate::mode::ThemeMode;
use crate::theme::{CUSTOM_THEME_ID, CUSTOM_THEME_NAME, Theme};

/// Persisted shape: `{"mode": "dark", "colors": {"primary": "#ff0000"}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomThemeConfig {
    pub mode: ThemeMode,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub colors: PartialThemeColors,
}

/// `"colors": null` is stored by older clients for "no overrides".
fn null_as_empty<'de, D>(deserializer: D) -> Result<PartialThemeColors, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<PartialThemeColors>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl CustomThemeConfig {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            colors: PartialThemeColors::new(),
        }
    }

    /// Set one slot override.
    #[must_use]
    pub fn with_color(mut self, slot: ColorSlot, color: impl Into<CssColor>) -> Self {
        self.colors.set(slot, color.into());
        self
    }

    /// Merge onto the default theme of [`CustomThemeConfig::mode`].
    pub fn materialize(&self) -> Theme {
        materialize(self.mode, &self.colors)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(s).map_err(ThemeError::MalformedCustomConfig)
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Overrides whose value does not look like a CSS color.
    pub fn ill_formed_slots(&self) -> Vec<ColorSlot> {
        self.colors
            .iter()
            .filter(|(_, color)| !color.is_well_formed())
            .map(|(slot, _)| slot)
            .collect()
    }
}

/// Build the custom theme for `mode` from a sparse override.
///
/// Every slot present in `overrides` wins; every other slot is copied from
/// the built-in default of `mode`. The id is always [`CUSTOM_THEME_ID`].
pub fn materialize(mode: ThemeMode, overrides: &PartialThemeColors) -> Theme {
    let base = catalog::default_for(mode);
    Theme {
        id: Cow::Borrowed(CUSTOM_THEME_ID),
        name: Cow::Borrowed(CUSTOM_THEME_NAME),
        mode,
        colors: base.colors.overlay(overrides),
    }
}
