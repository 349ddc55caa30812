//! Runtime configuration.

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::time::Duration;

use crate::port::DEFAULT_PORT_WINDOW;

/// Port tried first when looking for somewhere to listen.
pub const DEFAULT_PORT: u16 = 8080;

/// Address the server binds to by default.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// How long in-flight requests get to finish after a shutdown request.
pub const DEFAULT_SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Pause between asking for the browser and minimizing the console, so the
/// browser window has appeared before the terminal goes away.
pub const DEFAULT_MINIMIZE_DELAY: Duration = Duration::from_millis(500);

/// Upper bound on handling a single request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for one run of the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    /// First port probed; later ones are tried if it is busy.
    pub preferred_port: u16,
    /// Number of consecutive ports probed.
    pub port_window: u16,
    pub open_browser: bool,
    pub minimize_window: bool,
    /// Load scenarios from this directory instead of the embedded set.
    pub scenarios_dir: Option<PathBuf>,
    /// Serve the page from this file instead of the embedded markup.
    pub page_path: Option<PathBuf>,
    pub shutdown_grace: Duration,
    pub minimize_delay: Duration,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            preferred_port: DEFAULT_PORT,
            port_window: DEFAULT_PORT_WINDOW,
            open_browser: true,
            minimize_window: true,
            scenarios_dir: None,
            page_path: None,
            shutdown_grace: DEFAULT_SHUTDOWN_GRACE,
            minimize_delay: DEFAULT_MINIMIZE_DELAY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl Config {
    /// Configuration for running without touching the desktop (tests, headless use).
    pub fn headless() -> Self {
        Self {
            open_browser: false,
            minimize_window: false,
            ..Self::default()
        }
    }
}
