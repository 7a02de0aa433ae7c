//! Error type for the theme toggle.
//!
//! None of these reach the user. The controller logs and swallows them so
//! the page degrades to "no persistence, default appearance".

/// Failures raised by storage, the DOM, or configuration parsing.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The browser exposes no `localStorage` (disabled by policy, sandboxed frame).
    #[error("local storage unavailable")]
    StorageUnavailable,

    /// Reading or writing the stored preference threw.
    #[error("storage access failed: {0}")]
    Storage(String),

    /// A required DOM object or call failed.
    #[error("dom error: {0}")]
    Dom(String),

    /// Host-supplied configuration JSON could not be parsed.
    #[error("invalid toggle config: {0}")]
    Config(#[from] serde_json::Error),
}
