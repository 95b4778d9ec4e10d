#![forbid(unsafe_code)]

//! JS-facing context logic, independent of the browser.
//!
//! [`ContextCore`] wraps a [`ThemeEngine`] with the calling conventions of the
//! JS `ThemeContext`: string and JSON in, JSON and `bool` out, errors logged
//! and swallowed. The `wasm` module only adapts `web_sys` handles onto it, so
//! everything here runs under native tests.

use serde::Serialize;

use kotomare_theme::{
    ColorSchemeSource, CustomThemeConfig, EngineConfig, ThemeEngine, ThemeEnvironment, ThemeError,
    ThemeMode, ThemeStorage,
};

/// Serialize for the JS side. Serialization of theme types cannot fail in
/// practice; if it does, JS receives `null`.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(err) => {
            tracing::error!(error = %err, "failed to encode value for JS");
            "null".to_string()
        }
    }
}

/// Parse the argument of `setCustomTheme`. `None`, empty input and JSON
/// `null` all clear the draft.
pub fn parse_custom_theme(json: Option<&str>) -> Result<Option<CustomThemeConfig>, ThemeError> {
    match json.map(str::trim) {
        None | Some("") | Some("null") => Ok(None),
        Some(raw) => CustomThemeConfig::from_json_str(raw).map(Some),
    }
}

/// The state behind one JS `ThemeContext`.
#[derive(Debug)]
pub struct ContextCore<S, E> {
    engine: ThemeEngine<S, E>,
}

impl<S: ThemeStorage, E: ThemeEnvironment> ContextCore<S, E> {
    /// Build and initialize the engine.
    pub fn new<P: ColorSchemeSource + ?Sized>(
        config: EngineConfig,
        storage: S,
        environment: E,
        preference: &P,
    ) -> Self {
        let mut engine = ThemeEngine::new(config, storage, environment);
        engine.initialize(preference);
        Self { engine }
    }

    pub fn engine(&self) -> &ThemeEngine<S, E> {
        &self.engine
    }

    pub fn theme_json(&self) -> String {
        to_json(self.engine.theme())
    }

    pub fn mode(&self) -> &'static str {
        self.engine.mode().as_str()
    }

    pub fn set_theme(&mut self, id: &str) -> bool {
        self.engine.select_theme(id).is_ok()
    }

    /// Accepts `"light"` or `"dark"`; anything else is logged and ignored.
    pub fn set_mode(&mut self, mode: &str) -> bool {
        match mode.parse::<ThemeMode>() {
            Ok(mode) => {
                self.engine.select_mode(mode);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "setMode ignored");
                false
            }
        }
    }

    pub fn toggle_mode(&mut self) {
        self.engine.toggle_mode();
    }

    pub fn custom_theme_json(&self) -> String {
        to_json(&self.engine.custom_config())
    }

    pub fn set_custom_theme(&mut self, json: Option<&str>) -> bool {
        match parse_custom_theme(json) {
            Ok(config) => {
                self.engine.update_custom_config(config);
                true
            }
            Err(err) => {
                tracing::warn!(error_type = err.error_type(), error = %err, "setCustomTheme ignored");
                false
            }
        }
    }

    pub fn apply_custom_theme(&mut self) -> bool {
        self.engine.apply_custom_config().is_ok()
    }

    pub fn is_custom_theme(&self) -> bool {
        self.engine.is_custom_active()
    }

    pub fn snapshot_json(&self) -> String {
        to_json(&self.engine.snapshot())
    }

    /// Forwarded from the `prefers-color-scheme` listener.
    pub fn preference_changed(&mut self, prefers_dark: bool) -> bool {
        self.engine.handle_preference_change(prefers_dark)
    }
}
