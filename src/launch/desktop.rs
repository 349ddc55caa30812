//! Desktop orchestrator for browser and window operations.

use super::error::LaunchError;
use super::result::LaunchMethod;
use super::tool::{DesktopTool, ToolError};
use super::tools::platform_tools;
use tracing::debug;

/// Orchestrates desktop operations using the available tools.
///
/// Tools are tried in priority order; the first one that succeeds wins.
pub struct Desktop {
    tools: Vec<Box<dyn DesktopTool>>,
}

impl Desktop {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn DesktopTool>>) -> Self {
        Self { tools }
    }

    /// Get a reference to the tools list.
    pub fn tools(&self) -> &[Box<dyn DesktopTool>] {
        &self.tools
    }

    /// Open `url` in the user's default browser.
    pub fn open_url(&self, url: &str) -> Result<LaunchMethod, LaunchError> {
        self.first_success(
            "open a browser",
            |tool| tool.can_open_urls(),
            |tool| tool.try_open_url(url),
        )
    }

    /// Minimize or hide the console window that launched this process.
    pub fn minimize(&self) -> Result<LaunchMethod, LaunchError> {
        self.first_success(
            "minimize the window",
            |tool| tool.can_minimize(),
            |tool| tool.try_minimize(),
        )
    }

    fn first_success(
        &self,
        action: &'static str,
        supports: impl Fn(&dyn DesktopTool) -> bool,
        attempt: impl Fn(&dyn DesktopTool) -> Result<(), ToolError>,
    ) -> Result<LaunchMethod, LaunchError> {
        if self.tools.is_empty() {
            return Err(LaunchError::UnsupportedPlatform);
        }

        let mut last_failure = None;
        for tool in &self.tools {
            let tool = tool.as_ref();
            if !tool.is_available() || !supports(tool) {
                continue;
            }
            match attempt(tool) {
                Ok(()) => return Ok(tool.method()),
                Err(ToolError::NotSupported) | Err(ToolError::NotFound) => continue,
                Err(ToolError::Failed(message)) => {
                    debug!(tool = tool.name(), %message, "tool failed, trying next");
                    last_failure = Some(LaunchError::ToolFailed {
                        tool: tool.name(),
                        message,
                    });
                }
            }
        }

        Err(last_failure.unwrap_or(LaunchError::NoToolAvailable { action }))
    }
}

impl Default for Desktop {
    fn default() -> Self {
        Self::new()
    }
}
