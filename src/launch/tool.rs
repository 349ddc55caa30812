//! DesktopTool trait and related error types.

use super::result::LaunchMethod;

/// A program that can open URLs or minimize the console window.
///
/// Each implementation wraps a specific OS tool (xdg-open, osascript, etc.)
/// and knows how to invoke it correctly.
pub trait DesktopTool: Send + Sync {
    /// The method identifier for this tool.
    fn method(&self) -> LaunchMethod;

    /// Human-readable name for error messages.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Check if this tool is available on the system.
    ///
    /// Should be fast - typically checks the platform or that the binary exists.
    fn is_available(&self) -> bool;

    /// Whether this tool can open a URL in the default browser.
    fn can_open_urls(&self) -> bool;

    /// Whether this tool can minimize or hide the controlling window.
    fn can_minimize(&self) -> bool;

    /// Try to open `url` in the default browser.
    ///
    /// Must return as soon as the browser has been asked to open; it never
    /// waits for the browser itself.
    fn try_open_url(&self, url: &str) -> Result<(), ToolError>;

    /// Try to minimize the window that launched this process.
    fn try_minimize(&self) -> Result<(), ToolError>;
}

/// Error from a specific tool operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// Tool doesn't support this operation
    NotSupported,
    /// Tool execution failed
    Failed(String),
    /// Tool not found on system
    NotFound,
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotSupported => write!(f, "operation not supported"),
            Self::Failed(message) => write!(f, "{}", message),
            Self::NotFound => write!(f, "not found"),
        }
    }
}
