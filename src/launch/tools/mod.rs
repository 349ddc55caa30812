//! Platform-specific browser and window tools.

mod open;
mod osascript;
mod powershell;
mod rundll32;
mod wmctrl;
mod xdg_open;

pub use open::Open;
pub use osascript::{OsaScript, OsaTarget};
pub use powershell::PowerShell;
pub use rundll32::Rundll32;
pub use wmctrl::Wmctrl;
pub use xdg_open::XdgOpen;

use super::tool::{DesktopTool, ToolError};
use std::io::ErrorKind;
use std::process::{Command, Stdio};

/// Get the platform-appropriate tools in priority order.
pub fn platform_tools() -> Vec<Box<dyn DesktopTool>> {
    #[cfg(target_os = "macos")]
    {
        vec![
            Box::new(Open::new()),
            Box::new(OsaScript::terminal()),
            Box::new(OsaScript::iterm()),
            Box::new(OsaScript::system_events()),
        ]
    }

    #[cfg(target_os = "linux")]
    {
        vec![Box::new(XdgOpen::new()), Box::new(Wmctrl::new())]
    }

    #[cfg(target_os = "windows")]
    {
        vec![Box::new(Rundll32::new()), Box::new(PowerShell::new())]
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        vec![]
    }
}

/// Start `command` without waiting for it to finish.
///
/// The child is reaped on a background thread so it never lingers as a zombie.
pub(crate) fn spawn_detached(mut command: Command) -> Result<(), ToolError> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(spawn_error)?;

    std::thread::spawn(move || {
        let _ = child.wait();
    });
    Ok(())
}

/// Run `command` to completion, failing on a non-zero exit.
pub(crate) fn run_to_completion(mut command: Command, tool: &str) -> Result<(), ToolError> {
    let output = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(spawn_error)?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        Err(ToolError::Failed(format!("{} failed ({})", tool, output.status)))
    } else {
        Err(ToolError::Failed(format!("{} failed: {}", tool, stderr)))
    }
}

fn spawn_error(e: std::io::Error) -> ToolError {
    if e.kind() == ErrorKind::NotFound {
        ToolError::NotFound
    } else {
        ToolError::Failed(e.to_string())
    }
}
