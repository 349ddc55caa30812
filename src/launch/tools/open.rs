//! macOS `open` browser launcher.

use super::spawn_detached;
use crate::launch::result::LaunchMethod;
use crate::launch::tool::{DesktopTool, ToolError};
use std::process::Command;

/// Opens URLs through LaunchServices.
pub struct Open;

impl Open {
    /// Create a new Open tool.
    pub fn new() -> Self {
        Self
    }
}

impl DesktopTool for Open {
    fn method(&self) -> LaunchMethod {
        LaunchMethod::Open
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn can_open_urls(&self) -> bool {
        true
    }

    fn can_minimize(&self) -> bool {
        false
    }

    fn try_open_url(&self, url: &str) -> Result<(), ToolError> {
        let mut command = Command::new("open");
        command.arg(url);
        spawn_detached(command)
    }

    fn try_minimize(&self) -> Result<(), ToolError> {
        Err(ToolError::NotSupported)
    }
}

impl Default for Open {
    fn default() -> Self {
        Self::new()
    }
}
