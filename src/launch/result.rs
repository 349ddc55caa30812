//! Launch method identifiers.

/// Which tool carried out a desktop operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMethod {
    /// Linux freedesktop URL opener
    XdgOpen,
    /// macOS `open`
    Open,
    /// Windows URL protocol handler
    Rundll32,
    /// Linux X11 window manager control
    Wmctrl,
    /// macOS AppleScript against Terminal.app
    OsaScriptTerminal,
    /// macOS AppleScript against iTerm2
    OsaScriptITerm,
    /// macOS AppleScript against the frontmost process
    OsaScriptSystemEvents,
    /// Windows console window via user32
    PowerShell,
}

impl LaunchMethod {
    /// Tool name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::XdgOpen => "xdg-open",
            Self::Open => "open",
            Self::Rundll32 => "rundll32",
            Self::Wmctrl => "wmctrl",
            Self::OsaScriptTerminal => "osascript (Terminal)",
            Self::OsaScriptITerm => "osascript (iTerm2)",
            Self::OsaScriptSystemEvents => "osascript (System Events)",
            Self::PowerShell => "powershell",
        }
    }
}

impl std::fmt::Display for LaunchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
