#![forbid(unsafe_code)]

//! OS/browser color-scheme preference.
//!
//! The engine reads the preference once in
//! [`ThemeEngine::initialize`](crate::ThemeEngine::initialize). Later changes
//! are pushed by the host through
//! [`ThemeEngine::handle_preference_change`](crate::ThemeEngine::handle_preference_change);
//! the host owns the subscription and tears it down with the session.

use crate::mode::ThemeMode;

/// Source of the "prefers dark" signal.
pub trait ColorSchemeSource {
    fn prefers_dark(&self) -> bool;

    fn preferred_mode(&self) -> ThemeMode {
        ThemeMode::from_prefers_dark(self.prefers_dark())
    }
}

impl<F: Fn() -> bool> ColorSchemeSource for F {
    fn prefers_dark(&self) -> bool {
        self()
    }
}

/// A preference fixed at construction, for tests and hosts with no OS signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPreference(pub ThemeMode);

impl FixedPreference {
    pub const DARK: FixedPreference = FixedPreference(ThemeMode::Dark);
    pub const LIGHT: FixedPreference = FixedPreference(ThemeMode::Light);
}

impl Default for FixedPreference {
    fn default() -> Self {
        Self::DARK
    }
}

impl ColorSchemeSource for FixedPreference {
    fn prefers_dark(&self) -> bool {
        self.0.is_dark()
    }
}
