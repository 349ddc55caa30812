//! Browser launch and console window management.
//!
//! Both operations shell out to platform tools and are best-effort: a
//! failure is reported as a [`LaunchError`] for the caller to log, never a
//! panic, and never a reason to stop serving.

mod desktop;
mod error;
mod result;
mod tool;
pub mod tools;

pub use desktop::Desktop;
pub use error::LaunchError;
pub use result::LaunchMethod;
pub use tool::{DesktopTool, ToolError};
