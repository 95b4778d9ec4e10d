#![forbid(unsafe_code)]

//! Theme picker view model.
//!
//! Pure state for a picker UI: which built-ins to list under each tab, the
//! preview data for each card, and the custom-theme editing draft. Drawing
//! is left to the host.

use serde::Serialize;

use crate::catalog;
use crate::color::{ColorSlot, CssColor};
use crate::custom::CustomThemeConfig;
use crate::mode::ThemeMode;
use crate::theme::Theme;

/// Tabs of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorTab {
    #[default]
    Dark,
    Light,
    Custom,
}

impl SelectorTab {
    /// Built-ins listed under this tab. The custom tab lists none.
    pub fn themes(self) -> &'static [&'static Theme] {
        match self {
            Self::Dark => catalog::themes_for(ThemeMode::Dark),
            Self::Light => catalog::themes_for(ThemeMode::Light),
            Self::Custom => &[],
        }
    }

    /// Tab to open on for the active theme.
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.is_custom() {
            Self::Custom
        } else {
            match theme.mode {
                ThemeMode::Dark => Self::Dark,
                ThemeMode::Light => Self::Light,
            }
        }
    }
}

/// Preview of one theme in the picker grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeCard {
    pub id: String,
    pub name: String,
    pub background: CssColor,
    pub foreground: CssColor,
    pub border: CssColor,
    /// primary, secondary, backgroundSecondary
    pub swatches: [CssColor; 3],
    pub selected: bool,
}

impl ThemeCard {
    pub fn from_theme(theme: &Theme, active: &Theme) -> Self {
        let colors = &theme.colors;
        Self {
            id: theme.id().to_string(),
            name: theme.name().to_string(),
            background: colors.background.clone(),
            foreground: colors.foreground.clone(),
            border: colors.border.clone(),
            swatches: [
                colors.primary.clone(),
                colors.secondary.clone(),
                colors.background_secondary.clone(),
            ],
            selected: theme.id == active.id,
        }
    }

    /// Cards for every built-in under `tab`.
    pub fn for_tab(tab: SelectorTab, active: &Theme) -> Vec<Self> {
        tab.themes()
            .iter()
            .map(|theme| Self::from_theme(theme, active))
            .collect()
    }
}

/// Editing state of the custom tab.
///
/// Each edit yields the whole new configuration, which the host hands to
/// [`ThemeEngine::update_custom_config`](crate::ThemeEngine::update_custom_config).
/// Edits never change the active theme; applying is a separate action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomThemeDraft {
    config: CustomThemeConfig,
}

impl CustomThemeDraft {
    /// Seed from the engine's draft, or a dark draft with no overrides.
    pub fn from_config(config: Option<&CustomThemeConfig>) -> Self {
        Self {
            config: config.cloned().unwrap_or_default(),
        }
    }

    pub fn config(&self) -> &CustomThemeConfig {
        &self.config
    }

    pub fn mode(&self) -> ThemeMode {
        self.config.mode
    }

    /// Override one slot. An empty value removes the override.
    pub fn set_color(&mut self, slot: ColorSlot, value: impl Into<CssColor>) -> CustomThemeConfig {
        self.config.colors.set(slot, value.into());
        self.config.clone()
    }

    pub fn set_mode(&mut self, mode: ThemeMode) -> CustomThemeConfig {
        self.config.mode = mode;
        self.config.clone()
    }

    /// Value shown in the editor: the override, else `active`'s value.
    pub fn display_value<'a>(&'a self, slot: ColorSlot, active: &'a Theme) -> &'a CssColor {
        self.config
            .colors
            .get(slot)
            .unwrap_or_else(|| active.colors.get(slot))
    }

    /// Editable slots with their labels and displayed values.
    pub fn rows<'a>(&'a self, active: &'a Theme) -> Vec<(ColorSlot, &'static str, &'a CssColor)> {
        ColorSlot::EDITABLE
            .into_iter()
            .map(|slot| (slot, slot.label(), self.display_value(slot, active)))
            .collect()
    }
}
