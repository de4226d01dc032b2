//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::QuoteError;

impl HttpServer {
    /// Format a user-friendly error message for port binding failures
    pub(crate) fn format_bind_error(error: std::io::Error, bind_addr: &str, port: u16) -> QuoteError {
        let error_str = error.to_string();

        if error.kind() == std::io::ErrorKind::AddrInUse
            || error_str.contains("Address already in use")
            || error_str.contains("os error 48")
            || error_str.contains("os error 98")
        {
            let next = port.saturating_add(1);
            QuoteError::server(format!(
                "Port {} is already in use. Stop the other process or start with --port {} (or PORT={})",
                port, next, next
            ))
        } else if error.kind() == std::io::ErrorKind::PermissionDenied
            || error_str.contains("Permission denied")
            || error_str.contains("os error 13")
        {
            QuoteError::server(format!(
                "Permission denied for port {}. Use a port >= 1024, e.g. --port 8000 or PORT=8000",
                port
            ))
        } else {
            QuoteError::server(format!("Failed to bind to {}: {}", bind_addr, error))
        }
    }
}
