#![forbid(unsafe_code)]

//! Color slots and palette records.
//!
//! A theme assigns one CSS color string to each [`ColorSlot`]. The full record
//! is [`ThemeColors`]; user overrides are [`PartialThemeColors`], where every
//! slot is optional. Both are closed structs so that a missing slot is a
//! compile error rather than a blank variable at runtime.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A CSS-compatible color value (`#8b5cf6`, `rgba(0, 0, 0, 0.5)`, `white`, ...).
///
/// Built-in palettes borrow `'static` strings; user input is owned. The value
/// is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssColor(Cow<'static, str>);

impl CssColor {
    /// Wrap a compile-time color literal.
    pub const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// Wrap an owned color string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(Cow::Owned(value.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the value is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Lightweight syntax check for the color forms the client emits.
    ///
    /// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, the functional
    /// `rgb()`/`rgba()`/`hsl()`/`hsla()`/`var()` forms, and alphabetic keywords.
    /// This is advisory only; nothing is rejected on the basis of it.
    pub fn is_well_formed(&self) -> bool {
        let value = self.0.trim();
        if let Some(hex) = value.strip_prefix('#') {
            return matches!(hex.len(), 3 | 4 | 6 | 8)
                && hex.chars().all(|c| c.is_ascii_hexdigit());
        }
        let lower = value.to_ascii_lowercase();
        for prefix in ["rgb(", "rgba(", "hsl(", "hsla(", "var("] {
            if let Some(args) = lower.strip_prefix(prefix) {
                return args.len() > 1 && args.ends_with(')');
            }
        }
        // A bare run of hex letters (`fff`, `deadbeef`) is a hex color missing its `#`.
        !value.is_empty()
            && value.chars().all(|c| c.is_ascii_alphabetic())
            && !value.chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CssColor {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&'static str> for CssColor {
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

impl AsRef<str> for CssColor {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Semantic color slots, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    Background,
    BackgroundSecondary,
    BackgroundTertiary,
    Foreground,
    ForegroundSecondary,
    ForegroundMuted,
    Primary,
    PrimaryHover,
    PrimaryForeground,
    Secondary,
    SecondaryHover,
    SecondaryForeground,
    Border,
    BorderHover,
    Success,
    Warning,
    Error,
    Info,
}

impl ColorSlot {
    pub const ALL: [ColorSlot; 18] = [
        ColorSlot::Background,
        ColorSlot::BackgroundSecondary,
        ColorSlot::BackgroundTertiary,
        ColorSlot::Foreground,
        ColorSlot::ForegroundSecondary,
        ColorSlot::ForegroundMuted,
        ColorSlot::Primary,
        ColorSlot::PrimaryHover,
        ColorSlot::PrimaryForeground,
        ColorSlot::Secondary,
        ColorSlot::SecondaryHover,
        ColorSlot::SecondaryForeground,
        ColorSlot::Border,
        ColorSlot::BorderHover,
        ColorSlot::Success,
        ColorSlot::Warning,
        ColorSlot::Error,
        ColorSlot::Info,
    ];

    /// Slots offered for editing in the custom theme picker.
    pub const EDITABLE: [ColorSlot; 8] = [
        ColorSlot::Background,
        ColorSlot::BackgroundSecondary,
        ColorSlot::Foreground,
        ColorSlot::ForegroundSecondary,
        ColorSlot::Primary,
        ColorSlot::PrimaryHover,
        ColorSlot::Secondary,
        ColorSlot::Border,
    ];

    /// Key used in persisted JSON (`backgroundSecondary`).
    pub const fn key(self) -> &'static str {
        match self {
            ColorSlot::Background => "background",
            ColorSlot::BackgroundSecondary => "backgroundSecondary",
            ColorSlot::BackgroundTertiary => "backgroundTertiary",
            ColorSlot::Foreground => "foreground",
            ColorSlot::ForegroundSecondary => "foregroundSecondary",
            ColorSlot::ForegroundMuted => "foregroundMuted",
            ColorSlot::Primary => "primary",
            ColorSlot::PrimaryHover => "primaryHover",
            ColorSlot::PrimaryForeground => "primaryForeground",
            ColorSlot::Secondary => "secondary",
            ColorSlot::SecondaryHover => "secondaryHover",
            ColorSlot::SecondaryForeground => "secondaryForeground",
            ColorSlot::Border => "border",
            ColorSlot::BorderHover => "borderHover",
            ColorSlot::Success => "success",
            ColorSlot::Warning => "warning",
            ColorSlot::Error => "error",
            ColorSlot::Info => "info",
        }
    }

    /// Name of the shared CSS variable this slot is projected onto.
    pub const fn css_var(self) -> &'static str {
        match self {
            ColorSlot::Background => "--background",
            ColorSlot::BackgroundSecondary => "--background-secondary",
            ColorSlot::BackgroundTertiary => "--background-tertiary",
            ColorSlot::Foreground => "--foreground",
            ColorSlot::ForegroundSecondary => "--foreground-secondary",
            ColorSlot::ForegroundMuted => "--foreground-muted",
            ColorSlot::Primary => "--primary",
            ColorSlot::PrimaryHover => "--primary-hover",
            ColorSlot::PrimaryForeground => "--primary-foreground",
            ColorSlot::Secondary => "--secondary",
            ColorSlot::SecondaryHover => "--secondary-hover",
            ColorSlot::SecondaryForeground => "--secondary-foreground",
            ColorSlot::Border => "--border",
            ColorSlot::BorderHover => "--border-hover",
            ColorSlot::Success => "--success",
            ColorSlot::Warning => "--warning",
            ColorSlot::Error => "--error",
            ColorSlot::Info => "--info",
        }
    }

    /// Human-readable label for pickers.
    pub const fn label(self) -> &'static str {
        match self {
            ColorSlot::Background => "Main background",
            ColorSlot::BackgroundSecondary => "Secondary background",
            ColorSlot::BackgroundTertiary => "Tertiary background",
            ColorSlot::Foreground => "Main text",
            ColorSlot::ForegroundSecondary => "Secondary text",
            ColorSlot::ForegroundMuted => "Muted text",
            ColorSlot::Primary => "Primary color",
            ColorSlot::PrimaryHover => "Primary hover",
            ColorSlot::PrimaryForeground => "Text on primary",
            ColorSlot::Secondary => "Secondary color",
            ColorSlot::SecondaryHover => "Secondary hover",
            ColorSlot::SecondaryForeground => "Text on secondary",
            ColorSlot::Border => "Borders",
            ColorSlot::BorderHover => "Border hover",
            ColorSlot::Success => "Success",
            ColorSlot::Warning => "Warning",
            ColorSlot::Error => "Error",
            ColorSlot::Info => "Info",
        }
    }

    /// Look a slot up by its JSON key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.key() == key)
    }
}

impl fmt::Display for ColorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A complete palette: one color per slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub background: CssColor,
    pub background_secondary: CssColor,
    pub background_tertiary: CssColor,
    pub foreground: CssColor,
    pub foreground_secondary: CssColor,
    pub foreground_muted: CssColor,
    pub primary: CssColor,
    pub primary_hover: CssColor,
    pub primary_foreground: CssColor,
    pub secondary: CssColor,
    pub secondary_hover: CssColor,
    pub secondary_foreground: CssColor,
    pub border: CssColor,
    pub border_hover: CssColor,
    pub success: CssColor,
    pub warning: CssColor,
    pub error: CssColor,
    pub info: CssColor,
}

impl ThemeColors {
    pub fn get(&self, slot: ColorSlot) -> &CssColor {
        match slot {
            ColorSlot::Background => &self.background,
            ColorSlot::BackgroundSecondary => &self.background_secondary,
            ColorSlot::BackgroundTertiary => &self.background_tertiary,
            ColorSlot::Foreground => &self.foreground,
            ColorSlot::ForegroundSecondary => &self.foreground_secondary,
            ColorSlot::ForegroundMuted => &self.foreground_muted,
            ColorSlot::Primary => &self.primary,
            ColorSlot::PrimaryHover => &self.primary_hover,
            ColorSlot::PrimaryForeground => &self.primary_foreground,
            ColorSlot::Secondary => &self.secondary,
            ColorSlot::SecondaryHover => &self.secondary_hover,
            ColorSlot::SecondaryForeground => &self.secondary_foreground,
            ColorSlot::Border => &self.border,
            ColorSlot::BorderHover => &self.border_hover,
            ColorSlot::Success => &self.success,
            ColorSlot::Warning => &self.warning,
            ColorSlot::Error => &self.error,
            ColorSlot::Info => &self.info,
        }
    }

    pub fn get_mut(&mut self, slot: ColorSlot) -> &mut CssColor {
        match slot {
            ColorSlot::Background => &mut self.background,
            ColorSlot::BackgroundSecondary => &mut self.background_secondary,
            ColorSlot::BackgroundTertiary => &mut self.background_tertiary,
            ColorSlot::Foreground => &mut self.foreground,
            ColorSlot::ForegroundSecondary => &mut self.foreground_secondary,
            ColorSlot::ForegroundMuted => &mut self.foreground_muted,
            ColorSlot::Primary => &mut self.primary,
            ColorSlot::PrimaryHover => &mut self.primary_hover,
            ColorSlot::PrimaryForeground => &mut self.primary_foreground,
            ColorSlot::Secondary => &mut self.secondary,
            ColorSlot::SecondaryHover => &mut self.secondary_hover,
            ColorSlot::SecondaryForeground => &mut self.secondary_foreground,
            ColorSlot::Border => &mut self.border,
            ColorSlot::BorderHover => &mut self.border_hover,
            ColorSlot::Success => &mut self.success,
            ColorSlot::Warning => &mut self.warning,
            ColorSlot::Error => &mut self.error,
            ColorSlot::Info => &mut self.info,
        }
    }

    pub fn set(&mut self, slot: ColorSlot, color: CssColor) {
        *self.get_mut(slot) = color;
    }

    /// Iterate `(slot, color)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorSlot, &CssColor)> + '_ {
        ColorSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }

    /// Slots whose value is blank. Empty for any palette fit to apply.
    pub fn blank_slots(&self) -> Vec<ColorSlot> {
        self.iter()
            .filter(|(_, color)| color.is_blank())
            .map(|(slot, _)| slot)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.iter().all(|(_, color)| !color.is_blank())
    }

    /// Total merge: every non-blank override replaces the matching slot.
    #[must_use]
    pub fn overlay(&self, overrides: &PartialThemeColors) -> ThemeColors {
        let mut merged = self.clone();
        for (slot, color) in overrides.iter() {
            merged.set(slot, color.clone());
        }
        merged
    }
}

/// A sparse palette: only the slots a user chose to override.
///
/// Blank strings count as "not set", both when reading persisted JSON and when
/// merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialThemeColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_secondary: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_tertiary: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_secondary: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_muted: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_hover: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_foreground: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_hover: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_foreground: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_hover: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<CssColor>,
}

impl PartialThemeColors {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, slot: ColorSlot) -> &mut Option<CssColor> {
        match slot {
            ColorSlot::Background => &mut self.background,
            ColorSlot::BackgroundSecondary => &mut self.background_secondary,
            ColorSlot::BackgroundTertiary => &mut self.background_tertiary,
            ColorSlot::Foreground => &mut self.foreground,
            ColorSlot::ForegroundSecondary => &mut self.foreground_secondary,
            ColorSlot::ForegroundMuted => &mut self.foreground_muted,
            ColorSlot::Primary => &mut self.primary,
            ColorSlot::PrimaryHover => &mut self.primary_hover,
            ColorSlot::PrimaryForeground => &mut self.primary_foreground,
            ColorSlot::Secondary => &mut self.secondary,
            ColorSlot::SecondaryHover => &mut self.secondary_hover,
            ColorSlot::SecondaryForeground => &mut self.secondary_foreground,
            ColorSlot::Border => &mut self.border,
            ColorSlot::BorderHover => &mut self.border_hover,
            ColorSlot::Success => &mut self.success,
            ColorSlot::Warning => &mut self.warning,
            ColorSlot::Error => &mut self.error,
            ColorSlot::Info => &mut self.info,
        }
    }

    fn slot(&self, slot: ColorSlot) -> &Option<CssColor> {
        match slot {
            ColorSlot::Background => &self.background,
            ColorSlot::BackgroundSecondary => &self.background_secondary,
            ColorSlot::BackgroundTertiary => &self.background_tertiary,
            ColorSlot::Foreground => &self.foreground,
            ColorSlot::ForegroundSecondary => &self.foreground_secondary,
            ColorSlot::ForegroundMuted => &self.foreground_muted,
            ColorSlot::Primary => &self.primary,
            ColorSlot::PrimaryHover => &self.primary_hover,
            ColorSlot::PrimaryForeground => &self.primary_foreground,
            ColorSlot::Secondary => &self.secondary,
            ColorSlot::SecondaryHover => &self.secondary_hover,
            ColorSlot::SecondaryForeground => &self.secondary_foreground,
            ColorSlot::Border => &self.border,
            ColorSlot::BorderHover => &self.border_hover,
            ColorSlot::Success => &self.success,
            ColorSlot::Warning => &self.warning,
            ColorSlot::Error => &self.error,
            ColorSlot::Info => &self.info,
        }
    }

    /// The override for `slot`, if one is set and non-blank.
    pub fn get(&self, slot: ColorSlot) -> Option<&CssColor> {
        self.slot(slot).as_ref().filter(|color| !color.is_blank())
    }

    /// Set an override. Blank values clear the slot instead.
    pub fn set(&mut self, slot: ColorSlot, color: CssColor) {
        *self.slot_mut(slot) = if color.is_blank() { None } else { Some(color) };
    }

    /// Builder form of [`PartialThemeColors::set`].
    #[must_use]
    pub fn with(mut self, slot: ColorSlot, color: impl Into<CssColor>) -> Self {
        self.set(slot, color.into());
        self
    }

    /// Iterate the non-blank overrides in canonical slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorSlot, &CssColor)> + '_ {
        ColorSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|color| (slot, color)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
