//! Well-known names shared between the page markup and the toggle.

// ── DOM contract ────────────────────────────────────────────────

/// Element id of the toggle control rendered by the page template.
pub const TOGGLE_ID: &str = "dark-mode-toggle";

/// Class on `<body>` that switches the stylesheet into dark mode.
pub const DARK_CLASS: &str = "dark-mode";

/// Optional JSON `ToggleConfig` on `<body>`; missing fields keep their defaults.
pub const CONFIG_ATTR: &str = "data-theme-config";

/// Optional attribute on the toggle carrying the server-resolved icon directory.
pub const ICON_BASE_ATTR: &str = "data-icon-base";

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding `"dark"` or `"light"`.
pub const STORAGE_KEY: &str = "theme";

// ── Icons ───────────────────────────────────────────────────────

/// Static directory the icons are served from when the markup does not say otherwise.
pub const DEFAULT_ICON_BASE: &str = "/static/images";

/// Shown while dark mode is active (click to go light).
pub const SUN_ICON: &str = "sun-icon.svg";

/// Shown while light mode is active (click to go dark).
pub const MOON_ICON: &str = "moon-icon.svg";
