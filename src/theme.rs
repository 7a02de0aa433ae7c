//! The persisted light/dark preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{MOON_ICON, SUN_ICON};

/// Binary theme choice, stored as `"light"` or `"dark"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Map the class flag state onto a preference.
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    /// Decode a stored value. Anything but an exact match is treated as absent.
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Value written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Icon the toggle shows in this state: the sun offers a way back to light.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => MOON_ICON,
            Self::Dark => SUN_ICON,
        }
    }
}
