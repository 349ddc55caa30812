//! Command-line interface definition.
//!
//! Every flag is optional; running `hackterm` bare gives the default
//! behavior (port 8080 upward, embedded scenarios, open the browser, minimize
//! the console).

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, DEFAULT_HOST, DEFAULT_PORT};

/// Version string with build metadata.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("HACKTERM_BUILD_DATE"),
    ")"
);

/// Version string with build metadata.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("HACKTERM_BUILD_DATE"),
    ")"
);

/// Fake hacker terminal in your browser.
#[derive(Debug, Parser)]
#[command(name = "hackterm", version = VERSION)]
#[command(about = "Serve a fake hacker terminal page and open it in your browser")]
#[command(
    long_about = "Serve a fake hacker terminal page and open it in your browser.\n\n\
    Starts a local web server on the first free port from 8080 upward, opens \
    the default browser at it, and minimizes this terminal window. \
    Press Ctrl+C to quit."
)]
pub struct Cli {
    /// Preferred port; the next free one is used if it is busy
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to listen on
    #[arg(long, default_value_t = DEFAULT_HOST)]
    pub host: IpAddr,

    /// Don't open the browser
    #[arg(long)]
    pub no_browser: bool,

    /// Don't minimize the terminal window
    #[arg(long)]
    pub no_minimize: bool,

    /// Load scenario JSON files from this directory instead of the built-in set
    #[arg(long, value_name = "DIR")]
    pub scenarios_dir: Option<PathBuf>,

    /// Serve the page from this HTML file, re-read on every request
    #[arg(long, value_name = "FILE")]
    pub page: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            host: cli.host,
            preferred_port: cli.port,
            open_browser: !cli.no_browser,
            minimize_window: !cli.no_minimize,
            scenarios_dir: cli.scenarios_dir.clone(),
            page_path: cli.page.clone(),
            ..Config::default()
        }
    }
}
