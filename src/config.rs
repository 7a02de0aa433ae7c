//! Toggle configuration.
//!
//! Defaults match the markup the site templates render. A page may override
//! any field with a `data-theme-config` JSON attribute on `<body>`; missing
//! fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{DARK_CLASS, DEFAULT_ICON_BASE, STORAGE_KEY, TOGGLE_ID};
use crate::error::ThemeError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// Id of the toggle control.
    pub toggle_id: String,
    /// Class placed on `<body>` while dark mode is active.
    pub dark_class: String,
    /// `localStorage` key for the preference.
    pub storage_key: String,
    /// Directory the sun/moon icons are served from.
    pub icon_base: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            toggle_id: TOGGLE_ID.to_owned(),
            dark_class: DARK_CLASS.to_owned(),
            storage_key: STORAGE_KEY.to_owned(),
            icon_base: DEFAULT_ICON_BASE.to_owned(),
        }
    }
}

impl ToggleConfig {
    /// Parse a (possibly partial) JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] if `raw` is not valid JSON or a field
    /// has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Config from the page's `data-theme-config` attribute.
    ///
    /// Absent or invalid JSON yields the defaults; a bad attribute never
    /// disables the toggle.
    pub fn from_page(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("theme: {e}; using defaults");
                Self::default()
            }
        }
    }

    /// Apply the toggle's `data-icon-base` attribute when the markup carries one.
    #[must_use]
    pub fn with_markup_icon_base(self, icon_base: Option<&str>) -> Self {
        match icon_base {
            Some(base) => self.with_icon_base(base),
            None => self,
        }
    }

    /// Replace the icon directory, e.g. with one resolved by the server template.
    #[must_use]
    pub fn with_icon_base(mut self, icon_base: impl Into<String>) -> Self {
        self.icon_base = icon_base.into();
        self
    }

    /// Full `src` for an icon file under [`Self::icon_base`].
    pub fn icon_src(&self, file: &str) -> String {
        let base = self.icon_base.trim_end_matches('/');
        format!("{base}/{file}")
    }
}
