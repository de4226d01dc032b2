//! Helper functions for request inspection

use actix_web::http::header::HeaderMap;

/// Identifier used when no proxy header names the client
pub const DEFAULT_CLIENT_IP: &str = "127.0.0.1";

/// Client identifier for rate limiting and logs.
///
/// First entry of `X-Forwarded-For`, else `X-Real-IP`, else loopback.
/// Header values are trusted as sent; deploy behind a proxy that sets them.
pub fn client_ip(headers: &HeaderMap) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for") {
        if let Ok(forwarded) = forwarded.to_str() {
            if let Some(first) = forwarded.split(',').next() {
                let first = first.trim();
                if !first.is_empty() {
                    return first.to_string();
                }
            }
        }
    }

    if let Some(real_ip) = headers.get("x-real-ip") {
        if let Ok(real_ip) = real_ip.to_str() {
            let real_ip = real_ip.trim();
            if !real_ip.is_empty() {
                return real_ip.to_string();
            }
        }
    }

    DEFAULT_CLIENT_IP.to_string()
}
