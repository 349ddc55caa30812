//! hackterm - a fake hacker terminal served to your browser.
//!
//! The binary loads a corpus of scripted terminal scenarios, serves a page
//! that plays them back plus a small JSON API, opens the page in the default
//! browser, and minimizes the terminal it was started from.

pub mod cli;
pub mod config;
pub mod launch;
pub mod lifecycle;
pub mod port;
pub mod scenario;
pub mod server;

pub use config::Config;
pub use scenario::{Scenario, ScenarioLine, ScenarioStore};
