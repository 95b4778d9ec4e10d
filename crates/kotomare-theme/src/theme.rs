#![forbid(unsafe_code)]

//! The [`Theme`] record: identity, display name, mode, and palette.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::color::ThemeColors;
use crate::mode::ThemeMode;

/// Id of the theme materialized from the user's custom configuration.
pub const CUSTOM_THEME_ID: &str = "custom";

/// Display name of the materialized custom theme.
pub const CUSTOM_THEME_NAME: &str = "Personalizado";

/// A complete, named set of color assignments plus a light/dark tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub mode: ThemeMode,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for the theme materialized from a custom configuration.
    pub fn is_custom(&self) -> bool {
        self.id == CUSTOM_THEME_ID
    }
}
