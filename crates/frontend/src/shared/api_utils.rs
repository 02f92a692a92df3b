//! Endpoint URLs for the assistant backend.
//!
//! The base comes from `AppConfig::api_url`. `api_base` only supplies that
//! value when `API_URL` was not set at build time.

use super::config::config;

/// Port the assistant backend listens on when no `API_URL` is configured
pub const DEFAULT_API_PORT: u16 = 8000;

/// Base URL used when `API_URL` is unset: the page's own scheme and host on
/// `DEFAULT_API_PORT`, e.g. `http://localhost:8000`.
///
/// Returns an empty string outside a browser window, which leaves every
/// endpoint relative.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Configured API base joined with an endpoint path such as `"/chat"`
pub fn api_url(path: &str) -> String {
    join_url(&config().api_url, path)
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://api:8000", "/chat"), "http://api:8000/chat");
        assert_eq!(join_url("", "/chat"), "/chat");
    }
}
