#![forbid(unsafe_code)]

//! Light/dark classification shared by themes, defaults, and the root tag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether a theme is meant for a light or a dark surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Dark, ThemeMode::Light];

    /// The lowercase tag written to the rendering root (`"light"` / `"dark"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Map the OS/browser "prefers dark" signal to a mode.
    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a mode other than `light` or `dark`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError(pub String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme mode {:?} (expected \"light\" or \"dark\")", self.0)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for ThemeMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" | "Light" => Ok(ThemeMode::Light),
            "dark" | "Dark" => Ok(ThemeMode::Dark),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}
