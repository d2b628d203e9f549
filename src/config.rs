//! Runtime Configuration
//!
//! Read once at startup from `<meta name="wishlist:*">` tags of the host page,
//! falling back to the page origin for the API base.

use tracing::Level;

const META_API_BASE: &str = "wishlist:api-base";
const META_LOG_LEVEL: &str = "wishlist:log-level";
const META_NOTICE_TIMEOUT: &str = "wishlist:notice-timeout-ms";

const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Scheme and host the `/api` tree is served from
    pub api_base: String,
    pub log_level: Level,
    /// How long an error notice stays visible; 0 keeps it until clicked
    pub notice_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: Level::INFO,
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    pub fn with_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    /// Build the configuration from the current page
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let origin = window.location().origin().unwrap_or_default();
        let meta = |name: &str| -> Option<String> {
            window
                .document()?
                .query_selector(&format!("meta[name=\"{}\"]", name))
                .ok()??
                .get_attribute("content")
        };
        Self::from_lookup(origin, meta)
    }

    /// Apply overrides from a name → value lookup on top of the defaults
    pub fn from_lookup(origin: String, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::with_base(origin);
        if let Some(base) = lookup(META_API_BASE).filter(|b| !b.trim().is_empty()) {
            config.api_base = base.trim().to_string();
        }
        if let Some(level) = lookup(META_LOG_LEVEL).and_then(|l| l.trim().parse().ok()) {
            config.log_level = level;
        }
        if let Some(timeout) = lookup(META_NOTICE_TIMEOUT).and_then(|t| t.trim().parse().ok()) {
            config.notice_timeout_ms = timeout;
        }
        config
    }

    /// Join the API base and an absolute path
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_single_slash() {
        let config = AppConfig::with_base("http://localhost:8080/");
        assert_eq!(
            config.api_url("/api/1/wishlist"),
            "http://localhost:8080/api/1/wishlist"
        );
        let config = AppConfig::with_base("http://localhost:8080");
        assert_eq!(config.api_url("api/1"), "http://localhost:8080/api/1");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = AppConfig::from_lookup("http://origin".to_string(), |name| match name {
            META_API_BASE => Some(" https://api.example ".to_string()),
            META_LOG_LEVEL => Some("debug".to_string()),
            META_NOTICE_TIMEOUT => Some("0".to_string()),
            _ => None,
        });
        assert_eq!(config.api_base, "https://api.example");
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.notice_timeout_ms, 0);
    }

    #[test]
    fn test_from_lookup_ignores_bad_values() {
        let config = AppConfig::from_lookup("http://origin".to_string(), |name| match name {
            META_API_BASE => Some("   ".to_string()),
            META_LOG_LEVEL => Some("loud".to_string()),
            META_NOTICE_TIMEOUT => Some("soon".to_string()),
            _ => None,
        });
        assert_eq!(config, AppConfig::with_base("http://origin"));
    }
}
