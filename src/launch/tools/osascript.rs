//! macOS AppleScript window minimizer.

use super::run_to_completion;
use crate::launch::result::LaunchMethod;
use crate::launch::tool::{DesktopTool, ToolError};
use std::process::Command;

/// Which application the AppleScript talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsaTarget {
    /// Terminal.app front window
    Terminal,
    /// iTerm2 current window
    ITerm,
    /// Front window of whichever process is frontmost (needs accessibility permission)
    SystemEvents,
}

/// Minimizes a terminal window with `osascript`.
///
/// There is no portable way to find "our" window on macOS, so one instance
/// exists per target application and the orchestrator tries them in order.
pub struct OsaScript {
    target: OsaTarget,
}

impl OsaScript {
    /// Minimize the front Terminal.app window.
    pub fn terminal() -> Self {
        Self {
            target: OsaTarget::Terminal,
        }
    }

    /// Minimize the current iTerm2 window.
    pub fn iterm() -> Self {
        Self {
            target: OsaTarget::ITerm,
        }
    }

    /// Minimize the front window of the frontmost process.
    pub fn system_events() -> Self {
        Self {
            target: OsaTarget::SystemEvents,
        }
    }

    pub fn target(&self) -> OsaTarget {
        self.target
    }

    /// The AppleScript source for this target.
    pub fn script(&self) -> &'static str {
        match self.target {
            OsaTarget::Terminal => {
                r#"tell application "Terminal" to set miniaturized of front window to true"#
            }
            OsaTarget::ITerm => {
                r#"tell application "iTerm2" to tell current window to set miniaturized to true"#
            }
            OsaTarget::SystemEvents => {
                r#"tell application "System Events" to tell process (name of first process whose frontmost is true) to set value of attribute "AXMinimized" of front window to true"#
            }
        }
    }
}

impl DesktopTool for OsaScript {
    fn method(&self) -> LaunchMethod {
        match self.target {
            OsaTarget::Terminal => LaunchMethod::OsaScriptTerminal,
            OsaTarget::ITerm => LaunchMethod::OsaScriptITerm,
            OsaTarget::SystemEvents => LaunchMethod::OsaScriptSystemEvents,
        }
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
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
        let mut command = Command::new("osascript");
        command.args(["-e", self.script()]);
        run_to_completion(command, "osascript")
    }
}
