//! Linux xdg-open browser launcher.

use super::spawn_detached;
use crate::launch::result::LaunchMethod;
use crate::launch::tool::{DesktopTool, ToolError};
use std::process::Command;

/// Opens URLs with the freedesktop default handler.
pub struct XdgOpen;

impl XdgOpen {
    /// Create a new XdgOpen tool.
    pub fn new() -> Self {
        Self
    }
}

impl DesktopTool for XdgOpen {
    fn method(&self) -> LaunchMethod {
        LaunchMethod::XdgOpen
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux")
    }

    fn can_open_urls(&self) -> bool {
        true
    }

    fn can_minimize(&self) -> bool {
        false
    }

    fn try_open_url(&self, url: &str) -> Result<(), ToolError> {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        spawn_detached(command)
    }

    fn try_minimize(&self) -> Result<(), ToolError> {
        Err(ToolError::NotSupported)
    }
}

impl Default for XdgOpen {
    fn default() -> Self {
        Self::new()
    }
}
