#![forbid(unsafe_code)]

//! Built-in palettes shipped with the client.
//!
//! The catalog is a fixed set of immutable statics, partitioned into a dark
//! set and a light set. Each mode has a default (`dark-default`,
//! `light-default`) that custom themes fall back to.

use std::borrow::Cow;

use crate::color::{CssColor, ThemeColors};
use crate::mode::ThemeMode;
use crate::theme::Theme;

// ── Dark ────────────────────────────────────────────────────────────────

pub static DARK_DEFAULT: Theme = Theme {
    id: Cow::Borrowed("dark-default"),
    name: Cow::Borrowed("Oscuro Clásico"),
    mode: ThemeMode::Dark,
    colors: ThemeColors {
        background: CssColor::from_static("#09090b"),
        background_secondary: CssColor::from_static("#18181b"),
        background_tertiary: CssColor::from_static("#27272a"),
        foreground: CssColor::from_static("#fafafa"),
        foreground_secondary: CssColor::from_static("#a1a1aa"),
        foreground_muted: CssColor::from_static("#71717a"),
        primary: CssColor::from_static("#8b5cf6"),
        primary_hover: CssColor::from_static("#7c3aed"),
        primary_foreground: CssColor::from_static("#ffffff"),
        secondary: CssColor::from_static("#3f3f46"),
        secondary_hover: CssColor::from_static("#52525b"),
        secondary_foreground: CssColor::from_static("#ffffff"),
        border: CssColor::from_static("#27272a"),
        border_hover: CssColor::from_static("#3f3f46"),
        success: CssColor::from_static("#22c55e"),
        warning: CssColor::from_static("#eab308"),
        error: CssColor::from_static("#ef4444"),
        info: CssColor::from_static("#3b82f6"),
    },
};

pub static DARK_PURPLE: Theme = Theme {
    id: Cow::Borrowed("dark-purple"),
    name: Cow::Borrowed("Morado Noche"),
    mode: ThemeMode::Dark,
    colors: ThemeColors {
        background: CssColor::from_static("#0f0a1a"),
        background_secondary: CssColor::from_static("#1a1025"),
        background_tertiary: CssColor::from_static("#2d1f42"),
        foreground: CssColor::from_static("#f5f3ff"),
        foreground_secondary: CssColor::from_static("#c4b5fd"),
        foreground_muted: CssColor::from_static("#a78bfa"),
        primary: CssColor::from_static("#a855f7"),
        primary_hover: CssColor::from_static("#9333ea"),
        primary_foreground: CssColor::from_static("#ffffff"),
        secondary: CssColor::from_static("#4c1d95"),
        secondary_hover: CssColor::from_static("#5b21b6"),
        secondary_foreground: CssColor::from_static("#ffffff"),
        border: CssColor::from_static("#2d1f42"),
        border_hover: CssColor::from_static("#4c1d95"),
        success: CssColor::from_static("#22c55e"),
        warning: CssColor::from_static("#eab308"),
        error: CssColor::from_static("#ef4444"),
        info: CssColor::from_static("#818cf8"),
    },
};

pub static DARK_BLUE: Theme = Theme {
    id: Cow::Borrowed("dark-blue"),
    name: Cow::Borrowed("Azul Profundo"),
    mode: ThemeMode::Dark,
    colors: ThemeColors {
        background: CssColor::from_static("#0a0f1a"),
        background_secondary: CssColor::from_static("#111827"),
        background_tertiary: CssColor::from_static("#1e293b"),
        foreground: CssColor::from_static("#f1f5f9"),
        foreground_secondary: CssColor::from_static("#94a3b8"),
        foreground_muted: CssColor::from_static("#64748b"),
        primary: CssColor::from_static("#3b82f6"),
        primary_hover: CssColor::from_static("#2563eb"),
        primary_foreground: CssColor::from_static("#ffffff"),
        secondary: CssColor::from_static("#1e3a5f"),
        secondary_hover: CssColor::from_static("#1e40af"),
        secondary_foreground: CssColor::from_static("#ffffff"),
        border: CssColor::from_static("#1e293b"),
        border_hover: CssColor::from_static("#334155"),
        success: CssColor::from_static("#22c55e"),
        warning: CssColor::from_static("#eab308"),
        error: CssColor::from_static("#ef4444"),
        info: CssColor::from_static("#60a5fa"),
    },
};

pub static DARK_RED: Theme = Theme {
    id: Cow::Borrowed("dark-red"),
    name: Cow::Borrowed("Rojo Sangre"),
    mode: ThemeMode::Dark,
    colors: ThemeColors {
        background: CssColor::from_static("#0f0a0a"),
        background_secondary: CssColor::from_static("#1a1010"),
        background_tertiary: CssColor::from_static("#2d1a1a"),
        foreground: CssColor::from_static("#fef2f2"),
        foreground_secondary: CssColor::from_static("#fca5a5"),
        foreground_muted: CssColor::from_static("#f87171"),
        primary: CssColor::from_static("#ef4444"),
        primary_hover: CssColor::from_static("#dc2626"),
        primary_foreground: CssColor::from_static("#ffffff"),
        secondary: CssColor::from_static("#7f1d1d"),
        secondary_hover: CssColor::from_static("#991b1b"),
        secondary_foreground: CssColor::from_static("#ffffff"),
        border: CssColor::from_static("#2d1a1a"),
        border_hover: CssColor::from_static("#450a0a"),
        success: CssColor::from_static("#22c55e"),
        warning: CssColor::from_static("#eab308"),
        error: CssColor::from_static("#f87171"),
        info: CssColor::from_static("#3b82f6"),
    },
};

pub static DARK_GREEN: Theme = Theme {
    id: Cow::Borrowed("dark-green"),
    name: Cow::Borrowed("Verde Esmeralda"),
    mode: ThemeMode::Dark,
    colors: ThemeColors {
        background: CssColor::from_static("#0a0f0d"),
        background_secondary: CssColor::from_static("#0d1512"),
        background_tertiary: CssColor::from_static("#14281f"),
        foreground: CssColor::from_static("#ecfdf5"),
        foreground_secondary: CssColor::from_static("#6ee7b7"),
        foreground_muted: CssColor::from_static("#34d399"),
        primary: CssColor::from_static("#10b981"),
        primary_hover: CssColor::from_static("#059669"),
        primary_foreground: CssColor::from_static("#ffffff"),
        secondary: CssColor::from_static("#064e3b"),
        secondary_hover: CssColor::from_static("#065f46"),
        secondary_foreground: CssColor::from_static("#ffffff"),
        border: CssColor::from_static("#14281f"),
        border_hover: CssColor::from_static("#064e3b"),
        success: CssColor::from_static("#34d399"),
        warning: CssColor::from_static("#eab308"),
        error: CssColor::from_static("#ef4444"),
        info: CssColor::from_static("#3b82f6"),
    },
};

pub static DARK_ORANGE: Theme = Theme {
    id: Cow::Borrowed("dark-orange"),
    name: Cow::Borrowed("Naranja Atardecer"),
    mode: ThemeMode::Dark,
    colors: ThemeColors {
        background: CssColor::from_static("#0f0a05"),
        background_secondary: CssColor::from_static("#1a1008"),
        background_tertiary: CssColor::from_static("#2d1f0d"),
        foreground: CssColor::from_static("#fff7ed"),
        foreground_secondary: CssColor::from_static("#fdba74"),
        foreground_muted: CssColor::from_static("#fb923c"),
        primary: CssColor::from_static("#f97316"),
        primary_hover: CssColor::from_static("#ea580c"),
        primary_foreground: CssColor::from_static("#ffffff"),
        secondary: CssColor::from_static("#7c2d12"),
        secondary_hover: CssColor::from_static("#9a3412"),
        secondary_foreground: CssColor::from_static("#ffffff"),
        border: CssColor::from_static("#2d1f0d"),
        border_hover: CssColor::from_static("#431407"),
        success: CssColor::from_static("#22c55e"),
        warning: CssColor::from_static("#fbbf24"),
        error: CssColor::from_static("#ef4444"),
        info: CssColor::from_static("#3b82f6"),
    },
};

// ── Light ───────────────────────────────────────────────────────────────

pub static LIGHT_DEFAULT: Theme = Theme {
    id: Cow::Borrowed("light-default"),
    name: Cow::Borrowed("Claro Clásico"),
    mode: ThemeMode::Light,
    colors: ThemeColors {
        background: CssColor::from_static("#ffffff"),
        background_secondary: CssColor::from_static("#f4f4f5"),
        background_tertiary: CssColor::from_static("#e4e4e7"),
        foreground: CssColor::from_static("#09090b"),
        foreground_secondary: CssColor::from_static("#3f3f46"),
        foreground_muted: CssColor::from_static("#71717a"),
        primary: CssColor::from_static("#7c3aed"),
        primary_hover: CssColor::from_static("#6d28d9"),
        primary_foreground: CssColor::from_static("#ffffff"),
        secondary: CssColor::from_static("#e4e4e7"),
        secondary_hover: CssColor::from_static("#d4d4d8"),
        secondary_foreground: CssColor::from_static("#18181b"),
        border: CssColor::from_static("#e4e4e7"),
        border_hover: CssColor::from_static("#d4d4d8"),
        success: CssColor::from_static("#16a34a"),
        warning: CssColor::from_static("#ca8a04"),
        error: CssColor::from_static("#dc2626"),
        info: CssColor::from_static("#2563eb"),
    },
};

pub static LIGHT_PURPLE: Theme = Theme {
    id: Cow::Borrowed("light-purple"),
    name: Cow::Borrowed("Lavanda"),
    mode: ThemeMode::Light,
    colors: ThemeColors {
        background: CssColor::from_static("#faf5ff"),
        background_secondary: CssColor::from_static("#f3e8ff"),
        background_tertiary: CssColor::from_static("#e9d5ff"),
        foreground: CssColor::from_static("#1e1b4b"),
        foreground_secondary: CssColor::from_static("#4c1d95"),
        foreground_muted: CssColor::from_static("#6b21a8"),
        primary: CssColor::from_static("#9333ea"),
        primary_hover: CssColor::from_static("#7e22ce"),
        primary_foreground: CssColor::from_static("#ffffff"),
        secondary: CssColor::from_static("#e9d5ff"),
        secondary_hover: CssColor::from_static("#d8b4fe"),
        secondary_foreground: CssColor::from_static("#581c87"),
        border: CssColor::from_static("#e9d5ff"),
        border_hover: CssColor::from_static("#d8b4fe"),
        success: CssColor::from_static("#16a34a"),
        warning: CssColor::from_static("#ca8a04"),
        error: CssColor::from_static("#dc2626"),
        info: CssColor::from_static("#2563eb"),
    },
};

pub static LIGHT_BLUE: Theme = Theme {
    id: Cow::Borrowed("light-blue"),
    name: Cow::Borrowed("Cielo"),
    mode: ThemeMode::Light,
    colors: ThemeColors {
        background: CssColor::from_static("#f0f9ff"),
        background_secondary: CssColor::from_static("#e0f2fe"),
        background_tertiary: CssColor::from_static("#bae6fd"),
        foreground: CssColor::from_static("#0c4a6e"),
        foreground_secondary: CssColor::from_static("#075985"),
        foreground_muted: CssColor::from_static("#0369a1"),
        primary: CssColor::from_static("#0284c7"),
        primary_hover: CssColor::from_static("#0369a1"),
        primary_foreground: CssColor::from_static("#ffffff"),
        secondary: CssColor::from_static("#bae6fd"),
        secondary_hover: CssColor::from_static("#7dd3fc"),
        secondary_foreground: CssColor::from_static("#0c4a6e"),
        border: CssColor::from_static("#bae6fd"),
        border_hover: CssColor::from_static("#7dd3fc"),
        success: CssColor::from_static("#16a34a"),
        warning: CssColor::from_static("#ca8a04"),
        error: CssColor::from_static("#dc2626"),
        info: CssColor::from_static("#0284c7"),
    },
};

pub static LIGHT_GREEN: Theme = Theme {
    id: Cow::Borrowed("light-green"),
    name: Cow::Borrowed("Menta"),
    mode: ThemeMode::Light,
    colors: ThemeColors {
        background: CssColor::from_static("#f0fdf4"),
        background_secondary: CssColor::from_static("#dcfce7"),
        background_tertiary: CssColor::from_static("#bbf7d0"),
        foreground: CssColor::from_static("#14532d"),
        foreground_secondary: CssColor::from_static("#166534"),
        foreground_muted: CssColor::from_static("#15803d"),
        primary: CssColor::from_static("#16a34a"),
        primary_hover: CssColor::from_static("#15803d"),
        primary_foreground: CssColor::from_static("#ffffff"),
        secondary: CssColor::from_static("#bbf7d0"),
        secondary_hover: CssColor::from_static("#86efac"),
        secondary_foreground: CssColor::from_static("#14532d"),
        border: CssColor::from_static("#bbf7d0"),
        border_hover: CssColor::from_static("#86efac"),
        success: CssColor::from_static("#16a34a"),
        warning: CssColor::from_static("#ca8a04"),
        error: CssColor::from_static("#dc2626"),
        info: CssColor::from_static("#2563eb"),
    },
};

pub static LIGHT_ROSE: Theme = Theme {
    id: Cow::Borrowed("light-rose"),
    name: Cow::Borrowed("Rosa"),
    mode: ThemeMode::Light,
    colors: ThemeColors {
        background: CssColor::from_static("#fff1f2"),
        background_secondary: CssColor::from_static("#ffe4e6"),
        background_tertiary: CssColor::from_static("#fecdd3"),
        foreground: CssColor::from_static("#881337"),
        foreground_secondary: CssColor::from_static("#9f1239"),
        foreground_muted: CssColor::from_static("#be123c"),
        primary: CssColor::from_static("#e11d48"),
        primary_hover: CssColor::from_static("#be123c"),
        primary_foreground: CssColor::from_static("#ffffff"),
        secondary: CssColor::from_static("#fecdd3"),
        secondary_hover: CssColor::from_static("#fda4af"),
        secondary_foreground: CssColor::from_static("#881337"),
        border: CssColor::from_static("#fecdd3"),
        border_hover: CssColor::from_static("#fda4af"),
        success: CssColor::from_static("#16a34a"),
        warning: CssColor::from_static("#ca8a04"),
        error: CssColor::from_static("#e11d48"),
        info: CssColor::from_static("#2563eb"),
    },
};
// ── Collections ─────────────────────────────────────────────────────────

pub static DARK_THEMES: [&Theme; 6] = [
    &DARK_DEFAULT,
    &DARK_PURPLE,
    &DARK_BLUE,
    &DARK_RED,
    &DARK_GREEN,
    &DARK_ORANGE,
];

pub static LIGHT_THEMES: [&Theme; 5] = [
    &LIGHT_DEFAULT,
    &LIGHT_PURPLE,
    &LIGHT_BLUE,
    &LIGHT_GREEN,
    &LIGHT_ROSE,
];

/// Every built-in theme, dark set first.
pub static ALL: [&Theme; 11] = [
    &DARK_DEFAULT,
    &DARK_PURPLE,
    &DARK_BLUE,
    &DARK_RED,
    &DARK_GREEN,
    &DARK_ORANGE,
    &LIGHT_DEFAULT,
    &LIGHT_PURPLE,
    &LIGHT_BLUE,
    &LIGHT_GREEN,
    &LIGHT_ROSE,
];

/// Find a built-in theme by id.
pub fn find(id: &str) -> Option<&'static Theme> {
    ALL.iter().copied().find(|theme| theme.id == id)
}

/// The default theme for a mode.
pub fn default_for(mode: ThemeMode) -> &'static Theme {
    match mode {
        ThemeMode::Dark => &DARK_DEFAULT,
        ThemeMode::Light => &LIGHT_DEFAULT,
    }
}

/// Built-in themes of one mode, in display order.
pub fn themes_for(mode: ThemeMode) -> &'static [&'static Theme] {
    match mode {
        ThemeMode::Dark => &DARK_THEMES,
        ThemeMode::Light => &LIGHT_THEMES,
    }
}

/// Return the total number of built-in themes.
pub const fn theme_count() -> usize {
    ALL.len()
}
