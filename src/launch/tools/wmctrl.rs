//! Linux X11 window hiding via wmctrl.

use super::run_to_completion;
use crate::launch::result::LaunchMethod;
use crate::launch::tool::{DesktopTool, ToolError};
use std::process::Command;

/// Hides the active window using `wmctrl`.
///
/// Only works under an EWMH-compliant X11 window manager. Wayland sessions
/// usually lack wmctrl entirely, in which case the spawn reports `NotFound`.
pub struct Wmctrl;

impl Wmctrl {
    /// Create a new Wmctrl tool.
    pub fn new() -> Self {
        Self
    }
}

impl DesktopTool for Wmctrl {
    fn method(&self) -> LaunchMethod {
        LaunchMethod::Wmctrl
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux")
    }

    fn can_open_urls(&self) -> bool {
        false
    }

    fn can_minimize(&self) -> bool {
        true
    }

    fn try_open_url(&self, _url: &str) -> Result<(), ToolError> {
        Err(ToolError::NotSupported)
    }

    fn try_minimize(&self) -> Result<(), ToolError> {
        let mut command = Command::new("wmctrl");
        command.args(["-r", ":ACTIVE:", "-b", "add,hidden"]);
        run_to_completion(command, "wmctrl")
    }
}

impl Default for Wmctrl {
    fn default() -> Self {
        Self::new()
    }
}
