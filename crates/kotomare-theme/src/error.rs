#![forbid(unsafe_code)]

//! Error model for the theme engine.
//!
//! No theme error is fatal. Each variant maps to a [`Recovery`] describing
//! how the engine degrades: keep the current theme, or ignore a persisted
//! value and fall back to a default.

use std::fmt;

use crate::storage::StorageError;

/// Failures the engine absorbs.
#[derive(Debug)]
pub enum ThemeError {
    /// The id is neither a built-in theme nor a usable custom sentinel.
    UnknownTheme(String),
    /// A custom theme was requested but no custom configuration exists.
    NoCustomConfig,
    /// The persisted custom configuration is not valid JSON for the schema.
    MalformedCustomConfig(serde_json::Error),
    /// The storage backend failed.
    Storage(StorageError),
}

/// What the engine does instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Leave the active theme untouched.
    KeepCurrent,
    /// Treat the persisted value as absent.
    IgnorePersisted,
}

impl ThemeError {
    pub fn recovery(&self) -> Recovery {
        match self {
            Self::UnknownTheme(_) | Self::NoCustomConfig => Recovery::KeepCurrent,
            Self::MalformedCustomConfig(_) | Self::Storage(_) => Recovery::IgnorePersisted,
        }
    }

    /// Error type label for log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::UnknownTheme(_) => "unknown_theme",
            Self::NoCustomConfig => "no_custom_config",
            Self::MalformedCustomConfig(_) => "malformed_custom_config",
            Self::Storage(_) => "storage",
        }
    }
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTheme(id) => write!(f, "unknown theme id {id:?}"),
            Self::NoCustomConfig => write!(f, "no custom theme configured"),
            Self::MalformedCustomConfig(e) => write!(f, "malformed custom theme: {e}"),
            Self::Storage(e) => write!(f, "theme storage: {e}"),
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedCustomConfig(e) => Some(e),
            Self::Storage(e) => Some(e),
            Self::UnknownTheme(_) | Self::NoCustomConfig => None,
        }
    }
}

impl From<StorageError> for ThemeError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

/// Standard result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn lookup_failures_keep_current_theme() {
        assert_eq!(
            ThemeError::UnknownTheme("x".into()).recovery(),
            Recovery::KeepCurrent
        );
        assert_eq!(ThemeError::NoCustomConfig.recovery(), Recovery::KeepCurrent);
    }

    #[test]
    fn persisted_failures_are_ignored() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err = ThemeError::MalformedCustomConfig(json_err);
        assert_eq!(err.recovery(), Recovery::IgnorePersisted);
        assert!(err.source().is_some());
        assert_eq!(err.error_type(), "malformed_custom_config");

        let err: ThemeError = StorageError::Unavailable("blocked".into()).into();
        assert_eq!(err.recovery(), Recovery::IgnorePersisted);
        assert!(err.to_string().contains("blocked"));
    }

    #[test]
    fn display_names_the_id() {
        let err = ThemeError::UnknownTheme("not-a-real-id".into());
        assert_eq!(err.to_string(), "unknown theme id \"not-a-real-id\"");
    }
}
