#![forbid(unsafe_code)]

//! Engine configuration.
//!
//! [`EngineConfig`] holds the storage keys and startup defaults. It can be
//! loaded from JSON, or from TOML with the `toml-config` feature:
//!
//! ```toml
//! theme_key = "kotomare-theme"
//! custom_theme_key = "kotomare-custom-theme"
//! fallback_mode = "dark"
//! follow_system = true
//! ```
//!
//! Every field has a default, so `EngineConfig::default()` matches the
//! deployed client.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::mode::ThemeMode;

/// Storage key for the selected theme id.
pub const DEFAULT_THEME_KEY: &str = "kotomare-theme";

/// Storage key for the JSON custom theme configuration.
pub const DEFAULT_CUSTOM_THEME_KEY: &str = "kotomare-custom-theme";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Storage key holding the selected theme id (built-in id or `"custom"`).
    pub theme_key: String,

    /// Storage key holding the custom theme JSON.
    pub custom_theme_key: String,

    /// Mode whose default is active before initialization completes.
    pub fallback_mode: ThemeMode,

    /// Follow OS preference changes while no explicit selection is persisted.
    pub follow_system: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_KEY.to_string(),
            custom_theme_key: DEFAULT_CUSTOM_THEME_KEY.to_string(),
            fallback_mode: ThemeMode::Dark,
            follow_system: true,
        }
    }
}

impl EngineConfig {
    /// Load from a JSON string and validate.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(ConfigError::Json)?;
        config.validated()
    }

    /// Load from a JSON file on disk and validate.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Load from a TOML string and validate.
    #[cfg(feature = "toml-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(ConfigError::Toml)?;
        config.validated()
    }

    /// Load from a TOML file on disk and validate.
    #[cfg(feature = "toml-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Validate all fields.
    ///
    /// Returns a list of problems. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.theme_key.trim().is_empty() {
            errors.push("theme_key must not be empty".into());
        }
        if self.custom_theme_key.trim().is_empty() {
            errors.push("custom_theme_key must not be empty".into());
        }
        if self.theme_key == self.custom_theme_key {
            errors.push(format!(
                "theme_key and custom_theme_key must differ, both are {:?}",
                self.theme_key
            ));
        }

        errors
    }

    fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Errors loading an [`EngineConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// JSON parse error.
    Json(serde_json::Error),
    /// TOML parse error.
    #[cfg(feature = "toml-config")]
    Toml(toml::de::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            #[cfg(feature = "toml-config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            #[cfg(feature = "toml-config")]
            Self::Toml(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.theme_key, "kotomare-theme");
        assert_eq!(config.custom_theme_key, "kotomare-custom-theme");
        assert_eq!(config.fallback_mode, ThemeMode::Dark);
        assert!(config.follow_system);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = EngineConfig::from_json_str(r#"{"fallback_mode":"light"}"#).unwrap();
        assert_eq!(config.fallback_mode, ThemeMode::Light);
        assert_eq!(config.theme_key, DEFAULT_THEME_KEY);
    }

    #[test]
    fn duplicate_keys_rejected() {
        let err = EngineConfig::from_json_str(r#"{"theme_key":"k","custom_theme_key":"k"}"#)
            .unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn empty_key_rejected() {
        let config = EngineConfig {
            theme_key: "  ".into(),
            ..EngineConfig::default()
        };
        assert_eq!(config.validate().len(), 1);
    }

    #[test]
    fn bad_json_is_json_error() {
        assert!(matches!(
            EngineConfig::from_json_str("{"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, r#"{"follow_system":false}"#).unwrap();
        let config = EngineConfig::from_json_file(&path).unwrap();
        assert!(!config.follow_system);
        assert!(matches!(
            EngineConfig::from_json_file(dir.path().join("missing.json")),
            Err(ConfigError::Io(_))
        ));
    }

    #[cfg(feature = "toml-config")]
    #[test]
    fn toml_config_loads() {
        let config = EngineConfig::from_toml_str(
            "theme_key = \"site-theme\"\nfallback_mode = \"light\"\n",
        )
        .unwrap();
        assert_eq!(config.theme_key, "site-theme");
        assert_eq!(config.fallback_mode, ThemeMode::Light);
        assert_eq!(config.custom_theme_key, DEFAULT_CUSTOM_THEME_KEY);
    }
}
