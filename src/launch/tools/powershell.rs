//! Windows console minimizer via PowerShell.

use super::spawn_detached;
use crate::launch::result::LaunchMethod;
use crate::launch::tool::{DesktopTool, ToolError};
use std::process::Command;

/// `ShowWindow` command that minimizes a window.
const SW_MINIMIZE: u8 = 2;

/// Minimizes the console window through user32 `ShowWindow`.
pub struct PowerShell;

impl PowerShell {
    /// Create a new PowerShell tool.
    pub fn new() -> Self {
        Self
    }

    /// Script that P/Invokes `GetConsoleWindow` and `ShowWindow`.
    pub fn script() -> String {
        format!(
            "Add-Type -TypeDefinition 'using System; using System.Runtime.InteropServices; \
             public class Win32 {{ \
             [DllImport(\"user32.dll\")] public static extern bool ShowWindow(IntPtr hWnd, int nCmdShow); \
             [DllImport(\"kernel32.dll\")] public static extern IntPtr GetConsoleWindow(); }}'; \
             $consolePtr = [Win32]::GetConsoleWindow(); [Win32]::ShowWindow($consolePtr, {})",
            SW_MINIMIZE
        )
    }
}

impl DesktopTool for PowerShell {
    fn method(&self) -> LaunchMethod {
        LaunchMethod::PowerShell
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "windows")
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
        // PowerShell takes a second or more to start; don't hold up startup on it.
        let mut command = Command::new("powershell");
        command.args(["-NoProfile", "-Command", &Self::script()]);
        spawn_detached(command)
    }
}

impl Default for PowerShell {
    fn default() -> Self {
        Self::new()
    }
}
