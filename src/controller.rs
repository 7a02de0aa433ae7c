//! Theme state controller.
//!
//! Keeps the body class flag, the toggle icon and the stored preference
//! consistent. The browser is reached only through [`ThemeSurface`] and
//! [`PreferenceStore`], so everything here runs under plain `cargo test`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. Storage failures are logged and swallowed so
//! the visual toggle keeps working for the session when `localStorage` is
//! disabled or throws.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::ToggleConfig;
use crate::error::ThemeError;
use crate::theme::ThemePreference;

/// The rendered page: the body class flag and the toggle's icon.
pub trait ThemeSurface {
    /// Whether the dark class is currently present. Source of truth at runtime.
    fn is_dark(&self) -> bool;

    /// Add the dark class.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] if the class list cannot be changed.
    fn add_dark(&mut self) -> Result<(), ThemeError>;

    /// Flip the dark class and return whether it is now present.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] if the class list cannot be changed.
    fn toggle_dark(&mut self) -> Result<bool, ThemeError>;

    /// Point the toggle icon at `src`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] if the icon attribute cannot be set.
    fn set_icon_src(&mut self, src: &str) -> Result<(), ThemeError>;
}

/// Key-value storage surviving page reloads.
pub trait PreferenceStore {
    /// Stored value for `key`, `None` if never written.
    ///
    /// # Errors
    ///
    /// [`ThemeError::StorageUnavailable`] when there is no backing store,
    /// [`ThemeError::Storage`] when the read throws.
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Overwrite `key` with `value`.
    ///
    /// # Errors
    ///
    /// [`ThemeError::StorageUnavailable`] when there is no backing store,
    /// [`ThemeError::Storage`] when the write throws (quota, policy).
    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// Restore and hand back a controller for `toggle`, or nothing if the page
/// has no toggle control.
///
/// `build` runs only when the toggle exists, so a page without one is never
/// touched: no class, no icon, no storage access.
pub fn mount<T, S, P>(
    toggle: Option<T>,
    build: impl FnOnce(&T) -> ThemeController<S, P>,
) -> Option<(T, ThemeController<S, P>)>
where
    S: ThemeSurface,
    P: PreferenceStore,
{
    let toggle = toggle?;
    let mut controller = build(&toggle);
    let restored = controller.restore();
    log::debug!("theme: restored {}", restored.as_str());
    Some((toggle, controller))
}

/// One per page session. Built after the document is parsed.
pub struct ThemeController<S, P> {
    config: ToggleConfig,
    surface: S,
    store: P,
}

impl<S: ThemeSurface, P: PreferenceStore> ThemeController<S, P> {
    pub fn new(config: ToggleConfig, surface: S, store: P) -> Self {
        Self { config, surface, store }
    }

    /// Apply the stored preference. Only `dark` changes the page; an absent,
    /// `light`, malformed or unreadable value leaves the markup defaults alone.
    pub fn restore(&mut self) -> ThemePreference {
        let stored = match self.store.load(&self.config.storage_key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("theme: could not read stored preference: {e}");
                None
            }
        };

        let pref = match stored.as_deref() {
            Some(raw) => ThemePreference::from_stored(raw).unwrap_or_else(|| {
                log::debug!("theme: ignoring malformed stored value {raw:?}");
                ThemePreference::Light
            }),
            None => ThemePreference::Light,
        };

        if pref.is_dark() {
            if let Err(e) = self.surface.add_dark() {
                log::warn!("theme: could not apply dark class: {e}");
                return self.current();
            }
            self.show_icon(pref);
        }
        pref
    }

    /// Handle one activation of the toggle control.
    pub fn toggle(&mut self) -> ThemePreference {
        let is_dark = match self.surface.toggle_dark() {
            Ok(is_dark) => is_dark,
            Err(e) => {
                log::warn!("theme: could not toggle dark class: {e}");
                return self.current();
            }
        };

        let pref = ThemePreference::from_dark(is_dark);
        self.show_icon(pref);
        self.persist(pref);
        log::debug!("theme: switched to {}", pref.as_str());
        pref
    }

    /// Current theme as reflected by the class flag.
    pub fn current(&self) -> ThemePreference {
        ThemePreference::from_dark(self.surface.is_dark())
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn into_parts(self) -> (S, P) {
        (self.surface, self.store)
    }

    fn show_icon(&mut self, pref: ThemePreference) {
        let src = self.config.icon_src(pref.icon());
        if let Err(e) = self.surface.set_icon_src(&src) {
            log::warn!("theme: could not update toggle icon: {e}");
        }
    }

    fn persist(&mut self, pref: ThemePreference) {
        if let Err(e) = self.store.save(&self.config.storage_key, pref.as_str()) {
            log::warn!("theme: could not persist preference: {e}");
        }
    }
}
