//! # theme-toggle
//!
//! WASM dark-mode toggle for server-rendered pages. Flips a `dark-mode`
//! class on `<body>`, swaps the toggle's sun/moon icon, and remembers the
//! choice in `localStorage` under `theme` so the next page load comes up in
//! the same mode.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | `ThemePreference` and its stored encoding |
//! | [`config`] | `ToggleConfig`: element id, class, storage key, icon base path |
//! | [`controller`] | Browser-free [`controller::ThemeController`] and its seams |
//! | `dom` | web-sys surface/store and page binding (`hydrate` only) |
//! | [`error`] | `ThemeError` |
//! | [`consts`] | Names shared with the page markup |

pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

/// Module entry point: set up console logging and bind the toggle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Another bundle on the page may already own the logger.
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("theme: console logger already installed");
    }

    if let Err(e) = dom::install() {
        log::warn!("theme: toggle not installed: {e}");
    }
}
