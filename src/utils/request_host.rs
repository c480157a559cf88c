//! Request host extraction for short link composition.

use crate::error::AppError;
use axum::http::{HeaderMap, header};
use serde_json::json;

/// Extracts the host (including any port) from the `Host` header.
///
/// The creation response composes the short link as
/// `http://<request host>/<code>`, so the host comes from the inbound
/// request rather than static configuration.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the header is missing or not valid
/// UTF-8.
pub fn request_host(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?;

    Ok(host.to_string())
}

/// Best-effort client IP from proxy headers.
///
/// Takes the first entry of `X-Forwarded-For`, falling back to `X-Real-IP`.
/// Returns `None` when neither header is present; the click event simply
/// records no address.
pub fn client_ip(headers: &HeaderMap) -> Option<String> {
    if let Some(fwd) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        let first = fwd.split(',').next().unwrap_or(fwd).trim();
        if !first.is_empty() {
            return Some(first.to_string());
        }
    }

    headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_request_host_plain() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("example.com"));

        assert_eq!(request_host(&headers).unwrap(), "example.com");
    }

    #[test]
    fn test_request_host_keeps_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));

        assert_eq!(request_host(&headers).unwrap(), "localhost:3000");
    }

    #[test]
    fn test_request_host_missing() {
        let headers = HeaderMap::new();
        assert!(request_host(&headers).is_err());
    }

    #[test]
    fn test_client_ip_from_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );

        assert_eq!(client_ip(&headers).as_deref(), Some("203.0.113.7"));
    }

    #[test]
    fn test_client_ip_from_real_ip() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.4"));

        assert_eq!(client_ip(&headers).as_deref(), Some("198.51.100.4"));
    }

    #[test]
    fn test_client_ip_absent() {
        let headers = HeaderMap::new();
        assert!(client_ip(&headers).is_none());
    }
}
