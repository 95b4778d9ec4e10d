#![forbid(unsafe_code)]

//! Browser host for `kotomare-theme`.
//!
//! This crate provides `ThemeContext`, a `wasm-bindgen`-exported class that
//! owns a [`kotomare_theme::ThemeEngine`] backed by `localStorage`, the
//! document root, and the `prefers-color-scheme` media query. Its method
//! surface mirrors the page's theme context: `theme()`, `mode()`,
//! `setTheme(id)`, `setMode(mode)`, `toggleMode()`, `customTheme()`,
//! `setCustomTheme(config)`, `applyCustomTheme()`, `isCustomTheme()`.
//!
//! The calling conventions live in [`bridge`] so they can be tested natively.

pub mod bridge;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{
    DocumentEnvironment, LocalStorage, MediaQueryPreference, ThemeContext, init_logging,
};

pub use bridge::{ContextCore, parse_custom_theme, to_json};
