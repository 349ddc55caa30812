//! Browser and window operation errors.

/// Errors from a desktop operation.
///
/// These are never fatal: the caller logs them and carries on serving.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LaunchError {
    #[error("Platform not supported (only Linux, macOS and Windows)")]
    UnsupportedPlatform,

    #[error("No tool available to {action}. On Linux, install xdg-utils and wmctrl.")]
    NoToolAvailable { action: &'static str },

    #[error("'{tool}' failed: {message}")]
    ToolFailed { tool: &'static str, message: String },
}
