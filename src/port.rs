//! Local port discovery.
//!
//! Probe-binds candidate ports and releases them immediately so the real
//! server can bind the winner. This is inherently racy (another process may
//! take the port in between); the real bind is the authoritative result and
//! the probe only steers away from a busy default.

use std::net::{IpAddr, SocketAddr, TcpListener};

use tracing::debug;

/// Default number of consecutive ports tried before giving up.
pub const DEFAULT_PORT_WINDOW: u16 = 100;

/// First free port in `preferred..preferred + DEFAULT_PORT_WINDOW` on `host`.
///
/// Falls back to `preferred` when the whole window is busy.
pub fn find_available(host: IpAddr, preferred: u16) -> u16 {
    find_available_in(host, preferred, DEFAULT_PORT_WINDOW)
}

/// First free port among `window` consecutive ports starting at `preferred`.
///
/// Returns `preferred` unchanged when none of them can be bound, leaving the
/// caller's real bind to fail and report the problem.
pub fn find_available_in(host: IpAddr, preferred: u16, window: u16) -> u16 {
    for offset in 0..window {
        let Some(port) = preferred.checked_add(offset) else {
            break;
        };
        if is_free(host, port) {
            if offset > 0 {
                debug!(preferred, port, "preferred port busy, using next free port");
            }
            return port;
        }
    }

    debug!(preferred, window, "no free port found in window");
    preferred
}

/// Whether `port` can currently be bound on `host`.
///
/// The probe listener is dropped before returning.
pub fn is_free(host: IpAddr, port: u16) -> bool {
    TcpListener::bind(SocketAddr::new(host, port)).is_ok()
}
