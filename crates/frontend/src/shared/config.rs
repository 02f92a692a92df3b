//! Build-time configuration.
//!
//! Values come from the environment of the `trunk build` invocation:
//! `API_URL`, `USER_ID`, `CLOUD_PROVIDERS`. Nothing is validated; an unset
//! `API_URL` falls back to the page host (see `api_utils::api_base`).

use super::api_utils::api_base;
use once_cell::sync::Lazy;

const DEFAULT_USER_ID: &str = "default_user";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the assistant backend, without trailing slash
    pub api_url: String,
    /// Sent as `user_id` with every chat request
    pub user_id: String,
    /// Comma-separated provider filter for `/cloud-resources`
    pub providers: Option<String>,
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    AppConfig::from_values(
        option_env!("API_URL"),
        option_env!("USER_ID"),
        option_env!("CLOUD_PROVIDERS"),
    )
});

pub fn config() -> &'static AppConfig {
    &CONFIG
}

impl AppConfig {
    pub fn from_values(
        api_url: Option<&str>,
        user_id: Option<&str>,
        providers: Option<&str>,
    ) -> Self {
        let non_empty = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let api_url = match non_empty(api_url) {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => api_base(),
        };

        Self {
            api_url,
            user_id: non_empty(user_id).unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
            providers: non_empty(providers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let cfg = AppConfig::from_values(Some("http://localhost:8000/"), None, None);
        assert_eq!(cfg.api_url, "http://localhost:8000");
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::from_values(Some("http://api"), None, Some("  "));
        assert_eq!(cfg.user_id, "default_user");
        assert_eq!(cfg.providers, None);
    }

    #[test]
    fn test_explicit_values() {
        let cfg = AppConfig::from_values(Some("http://api"), Some("alice"), Some("aws,gcp"));
        assert_eq!(cfg.user_id, "alice");
        assert_eq!(cfg.providers.as_deref(), Some("aws,gcp"));
    }
}
