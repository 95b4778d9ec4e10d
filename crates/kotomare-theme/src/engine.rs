#![forbid(unsafe_code)]

//! The theme engine: owner of the active theme.
//!
//! [`ThemeEngine`] is an explicitly constructed object. The host creates it
//! at startup with a storage backend and a rendering environment, calls
//! [`ThemeEngine::initialize`] once, and routes user actions and OS
//! preference changes to it. Every state change re-applies the active theme
//! to the environment.
//!
//! # State
//!
//! ```text
//! uninitialized --initialize()--> { built-in active | custom active }
//! ```
//!
//! `select_theme`, `select_mode`, `toggle_mode`, `apply_custom_config` and
//! `handle_preference_change` move between the two initialized states. There
//! is no terminal state.
//!
//! # Failures
//!
//! Nothing here is fatal. Lookups that miss leave the active theme as it was
//! and return the error for the caller to log or drop. Unreadable persisted
//! data is logged and treated as absent. Storage write failures are logged;
//! the in-memory change stands.

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::config::EngineConfig;
use crate::custom::CustomThemeConfig;
use crate::environment::{ThemeEnvironment, apply_to_environment};
use crate::error::{Result, ThemeError};
use crate::mode::ThemeMode;
use crate::preference::ColorSchemeSource;
use crate::storage::ThemeStorage;
use crate::theme::{CUSTOM_THEME_ID, Theme};

/// Read side of the theme context handed to UI components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSnapshot {
    pub theme: Theme,
    pub mode: ThemeMode,
    pub custom_theme: Option<CustomThemeConfig>,
    pub is_custom_theme: bool,
}

/// Owner of the active theme, the custom draft, and their persistence.
#[derive(Debug)]
pub struct ThemeEngine<S, E> {
    config: EngineConfig,
    storage: S,
    environment: E,
    active: Theme,
    custom: Option<CustomThemeConfig>,
    is_custom_active: bool,
    initialized: bool,
}

impl<S: ThemeStorage, E: ThemeEnvironment> ThemeEngine<S, E> {
    /// Create an engine. Nothing is read or applied until
    /// [`ThemeEngine::initialize`].
    pub fn new(config: EngineConfig, storage: S, environment: E) -> Self {
        let active = catalog::default_for(config.fallback_mode).clone();
        Self {
            config,
            storage,
            environment,
            active,
            custom: None,
            is_custom_active: false,
            initialized: false,
        }
    }

    /// Create an engine with [`EngineConfig::default`].
    pub fn with_defaults(storage: S, environment: E) -> Self {
        Self::new(EngineConfig::default(), storage, environment)
    }

    /// Restore the persisted theme, or pick one from the OS preference.
    ///
    /// Runs once. Later calls are no-ops and return `false`.
    pub fn initialize<P: ColorSchemeSource + ?Sized>(&mut self, preference: &P) -> bool {
        if self.initialized {
            tracing::debug!("theme engine already initialized");
            return false;
        }
        let _span = tracing::debug_span!("theme.initialize").entered();

        let saved_id = self.read_key(&self.config.theme_key);
        if let Some(raw) = self.read_key(&self.config.custom_theme_key) {
            match CustomThemeConfig::from_json_str(&raw) {
                Ok(config) => self.custom = Some(config),
                Err(err) => tracing::warn!(
                    key = %self.config.custom_theme_key,
                    error_type = err.error_type(),
                    recovery = ?err.recovery(),
                    error = %err,
                    "ignoring malformed persisted custom theme"
                ),
            }
        }

        let restored = match saved_id.as_deref() {
            Some(CUSTOM_THEME_ID) => match &self.custom {
                Some(config) => Some((materialize_checked(config), true)),
                None => {
                    tracing::warn!("custom theme selected but no custom configuration persisted");
                    None
                }
            },
            Some(id) => match catalog::find(id) {
                Some(theme) => Some((theme.clone(), false)),
                None => {
                    tracing::warn!(theme_id = id, "persisted theme id is not in the catalog");
                    None
                }
            },
            None => None,
        };

        let (theme, is_custom) = restored.unwrap_or_else(|| {
            let mode = preference.preferred_mode();
            tracing::debug!(%mode, "no usable persisted theme, following system preference");
            (catalog::default_for(mode).clone(), false)
        });
        self.activate(theme, is_custom);
        self.initialized = true;
        tracing::info!(
            theme_id = %self.active.id,
            custom = self.is_custom_active,
            "theme engine initialized"
        );
        true
    }

    /// React to an OS/browser preference change.
    ///
    /// Switches to the matching mode default only while no explicit
    /// selection is persisted and following is enabled. Returns whether the
    /// active theme changed.
    pub fn handle_preference_change(&mut self, prefers_dark: bool) -> bool {
        if !self.initialized || !self.config.follow_system {
            return false;
        }
        if self.read_key(&self.config.theme_key).is_some() {
            tracing::debug!(prefers_dark, "explicit theme persisted, ignoring system change");
            return false;
        }
        let theme = catalog::default_for(ThemeMode::from_prefers_dark(prefers_dark));
        if !self.is_custom_active && self.active.id == theme.id {
            return false;
        }
        tracing::info!(theme_id = %theme.id, "following system color scheme");
        self.activate(theme.clone(), false);
        true
    }

    /// Select a built-in theme by id, or the custom theme via `"custom"`.
    ///
    /// Unknown ids (and `"custom"` without a draft) leave the active theme
    /// unchanged.
    pub fn select_theme(&mut self, id: &str) -> Result<()> {
        if id == CUSTOM_THEME_ID {
            return self.apply_custom_config();
        }
        match catalog::find(id) {
            Some(theme) => {
                self.activate(theme.clone(), false);
                self.persist_selection(id);
                tracing::info!(theme_id = id, "theme selected");
                Ok(())
            }
            None => {
                tracing::debug!(theme_id = id, "ignoring unknown theme id");
                Err(ThemeError::UnknownTheme(id.to_string()))
            }
        }
    }

    /// Switch to the default theme of `mode`.
    pub fn select_mode(&mut self, mode: ThemeMode) {
        let theme = catalog::default_for(mode);
        self.activate(theme.clone(), false);
        self.persist_selection(&theme.id);
        tracing::info!(%mode, theme_id = %theme.id, "theme mode selected");
    }

    /// Flip between the light and dark defaults.
    pub fn toggle_mode(&mut self) {
        self.select_mode(self.active.mode.toggled());
    }

    /// Replace the custom draft and persist it (or forget it on `None`).
    ///
    /// The active theme is not touched, even when it is the custom theme.
    pub fn update_custom_config(&mut self, config: Option<CustomThemeConfig>) {
        let key = &self.config.custom_theme_key;
        let outcome = match &config {
            Some(config) => match config.to_json_string() {
                Ok(json) => self.storage.set(key, &json),
                Err(err) => {
                    tracing::warn!(error = %err, "failed to encode custom theme");
                    Ok(())
                }
            },
            None => self.storage.remove(key),
        };
        if let Err(err) = outcome {
            tracing::warn!(%key, error = %err, "failed to persist custom theme");
        }
        tracing::debug!(
            present = config.is_some(),
            overrides = config.as_ref().map_or(0, |c| c.colors.len()),
            "custom theme draft updated"
        );
        self.custom = config;
    }

    /// Materialize the custom draft and make it active.
    ///
    /// Without a draft this is a no-op returning [`ThemeError::NoCustomConfig`].
    pub fn apply_custom_config(&mut self) -> Result<()> {
        let Some(config) = &self.custom else {
            tracing::debug!("no custom theme to apply");
            return Err(ThemeError::NoCustomConfig);
        };
        let theme = materialize_checked(config);
        self.activate(theme, true);
        self.persist_selection(CUSTOM_THEME_ID);
        tracing::info!(mode = %self.active.mode, "custom theme applied");
        Ok(())
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn theme(&self) -> &Theme {
        &self.active
    }

    pub fn mode(&self) -> ThemeMode {
        self.active.mode
    }

    pub fn custom_config(&self) -> Option<&CustomThemeConfig> {
        self.custom.as_ref()
    }

    pub fn is_custom_active(&self) -> bool {
        self.is_custom_active
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn environment(&self) -> &E {
        &self.environment
    }

    /// Owned copy of the context state.
    pub fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot {
            theme: self.active.clone(),
            mode: self.active.mode,
            custom_theme: self.custom.clone(),
            is_custom_theme: self.is_custom_active,
        }
    }

    /// Tear the engine down, returning its storage and environment.
    pub fn into_parts(self) -> (S, E) {
        (self.storage, self.environment)
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn activate(&mut self, theme: Theme, is_custom: bool) {
        self.active = theme;
        self.is_custom_active = is_custom;
        apply_to_environment(&mut self.environment, &self.active);
    }

    fn read_key(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(err) => {
                let err = ThemeError::from(err);
                tracing::warn!(
                    %key,
                    error_type = err.error_type(),
                    recovery = ?err.recovery(),
                    error = %err,
                    "theme storage read failed"
                );
                None
            }
        }
    }

    fn persist_selection(&mut self, id: &str) {
        if let Err(err) = self.storage.set(&self.config.theme_key, id) {
            tracing::warn!(key = %self.config.theme_key, error = %err, "failed to persist theme selection");
        }
    }
}

fn materialize_checked(config: &CustomThemeConfig) -> Theme {
    for slot in config.ill_formed_slots() {
        tracing::warn!(
            slot = slot.key(),
            value = %config.colors.get(slot).map(|c| c.as_str()).unwrap_or_default(),
            "custom theme color does not look like a CSS color"
        );
    }
    config.materialize()
}
