#![forbid(unsafe_code)]

//! Projection of the active theme onto the rendering environment.
//!
//! Every presentational component reads its colors from a shared set of
//! named variables (`--background`, `--primary`, ...). The engine is the only
//! writer: after each state change it calls [`apply_to_environment`], which
//! sets one variable per [`ColorSlot`] and tags the root with the mode.

use std::fmt::Write as _;

use ahash::AHashMap;

use crate::color::ColorSlot;
use crate::mode::ThemeMode;
use crate::theme::Theme;

/// Sink for theme variables.
///
/// The browser host writes to `document.documentElement`; tests and
/// server-side rendering use [`RecordingEnvironment`].
pub trait ThemeEnvironment {
    /// Set a shared color variable (`name` includes the leading `--`).
    fn set_variable(&mut self, name: &str, value: &str);

    /// Tag the root with `mode`, clearing the opposite tag.
    fn set_mode(&mut self, mode: ThemeMode);
}

impl<E: ThemeEnvironment + ?Sized> ThemeEnvironment for Box<E> {
    fn set_variable(&mut self, name: &str, value: &str) {
        (**self).set_variable(name, value);
    }

    fn set_mode(&mut self, mode: ThemeMode) {
        (**self).set_mode(mode);
    }
}

/// Write every slot of `theme` and its mode tag into `env`.
pub fn apply_to_environment<E: ThemeEnvironment + ?Sized>(env: &mut E, theme: &Theme) {
    for (slot, color) in theme.colors.iter() {
        env.set_variable(slot.css_var(), color.as_str());
    }
    env.set_mode(theme.mode);
    tracing::trace!(theme_id = %theme.id, mode = %theme.mode, "theme applied to environment");
}

/// Render `theme` as a CSS rule for `selector`.
///
/// Hosts inline this in the initial document so the first paint already uses
/// the persisted palette.
///
/// ```
/// use kotomare_theme::{catalog, render_stylesheet};
///
/// let css = render_stylesheet(&catalog::DARK_DEFAULT, ":root");
/// assert!(css.starts_with(":root {"));
/// assert!(css.contains("--primary: #8b5cf6;"));
/// ```
pub fn render_stylesheet(theme: &Theme, selector: &str) -> String {
    let mut css = String::with_capacity(64 + ColorSlot::ALL.len() * 40);
    let _ = writeln!(css, "{selector} {{");
    let _ = writeln!(css, "  color-scheme: {};", theme.mode);
    for (slot, color) in theme.colors.iter() {
        let _ = writeln!(css, "  {}: {};", slot.css_var(), color);
    }
    css.push('}');
    css.push('\n');
    css
}

/// Environment that records what was applied.
#[derive(Debug, Clone, Default)]
pub struct RecordingEnvironment {
    variables: AHashMap<String, String>,
    mode: Option<ThemeMode>,
    applications: usize,
}

impl RecordingEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Value written for `slot`'s variable.
    pub fn slot(&self, slot: ColorSlot) -> Option<&str> {
        self.variable(slot.css_var())
    }

    /// Current root tag, if any theme has been applied.
    pub fn mode(&self) -> Option<ThemeMode> {
        self.mode
    }

    /// Number of distinct variables written.
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Number of times a mode tag was written (one per applied theme).
    pub fn applications(&self) -> usize {
        self.applications
    }

    /// True when every variable matches `theme` and the mode tag agrees.
    pub fn reflects(&self, theme: &Theme) -> bool {
        self.mode == Some(theme.mode)
            && theme
                .colors
                .iter()
                .all(|(slot, color)| self.slot(slot) == Some(color.as_str()))
    }
}

impl ThemeEnvironment for RecordingEnvironment {
    fn set_variable(&mut self, name: &str, value: &str) {
        self.variables.insert(name.to_string(), value.to_string());
    }

    fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = Some(mode);
        self.applications += 1;
    }
}
