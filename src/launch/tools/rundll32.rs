//! Windows rundll32 browser launcher.

use super::spawn_detached;
use crate::launch::result::LaunchMethod;
use crate::launch::tool::{DesktopTool, ToolError};
use std::process::Command;

/// Opens URLs through the shell's URL protocol handler.
pub struct Rundll32;

impl Rundll32 {
    /// Create a new Rundll32 tool.
    pub fn new() -> Self {
        Self
    }
}

impl DesktopTool for Rundll32 {
    fn method(&self) -> LaunchMethod {
        LaunchMethod::Rundll32
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "windows")
    }

    fn can_open_urls(&self) -> bool {
        true
    }

    fn can_minimize(&self) -> bool {
        false
    }

    fn try_open_url(&self, url: &str) -> Result<(), ToolError> {
        let mut command = Command::new("rundll32");
        command.args(["url.dll,FileProtocolHandler", url]);
        spawn_detached(command)
    }

    fn try_minimize(&self) -> Result<(), ToolError> {
        Err(ToolError::NotSupported)
    }
}

impl Default for Rundll32 {
    fn default() -> Self {
        Self::new()
    }
}
