#![forbid(unsafe_code)]

//! Theme engine for the Kotomare client.
//!
//! # Role
//! `kotomare-theme` owns which color theme is active. It holds the built-in
//! palette catalog, merges user-authored custom themes onto a base palette,
//! persists the choice across sessions, and pushes every change into the
//! rendering environment as a set of named color variables.
//!
//! # This crate provides
//! - [`catalog`] of built-in dark and light [`Theme`]s.
//! - [`CustomThemeConfig`] and [`materialize`] for sparse user overrides.
//! - [`ThemeEngine`], the single stateful component, and its
//!   [`ThemeSnapshot`] read side.
//! - Seams for the host: [`ThemeStorage`], [`ThemeEnvironment`] and
//!   [`ColorSchemeSource`], with in-memory implementations for tests.
//! - [`selector`] view model for a theme picker.
//!
//! # Example
//!
//! ```
//! use kotomare_theme::{
//!     FixedPreference, MemoryStorage, RecordingEnvironment, ThemeEngine, ThemeMode,
//! };
//!
//! let mut engine = ThemeEngine::with_defaults(MemoryStorage::new(), RecordingEnvironment::new());
//! engine.initialize(&FixedPreference::LIGHT);
//! assert_eq!(engine.theme().id, "light-default");
//!
//! engine.select_theme("dark-blue").unwrap();
//! engine.toggle_mode();
//! assert_eq!(engine.mode(), ThemeMode::Light);
//! assert_eq!(engine.environment().variable("--background"), Some("#ffffff"));
//! ```

pub mod catalog;
pub mod color;
pub mod config;
pub mod custom;
pub mod engine;
pub mod environment;
pub mod error;
pub mod mode;
pub mod preference;
pub mod selector;
pub mod storage;
pub mod theme;

pub use color::{ColorSlot, CssColor, PartialThemeColors, ThemeColors};
pub use config::{ConfigError, DEFAULT_CUSTOM_THEME_KEY, DEFAULT_THEME_KEY, EngineConfig};
pub use custom::{CustomThemeConfig, materialize};
pub use engine::{ThemeEngine, ThemeSnapshot};
pub use environment::{
    RecordingEnvironment, ThemeEnvironment, apply_to_environment, render_stylesheet,
};
pub use error::{Recovery, Result, ThemeError};
pub use mode::{ParseModeError, ThemeMode};
pub use preference::{ColorSchemeSource, FixedPreference};
pub use selector::{CustomThemeDraft, SelectorTab, ThemeCard};
#[cfg(feature = "file-storage")]
pub use storage::FileStorage;
pub use storage::{MemoryStorage, StorageError, StorageResult, ThemeStorage};
pub use theme::{CUSTOM_THEME_ID, CUSTOM_THEME_NAME, Theme};
