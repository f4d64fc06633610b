//! Runtime configuration
//!
//! Sourced from the process environment with the same variable names and
//! defaults as the reference deployment: BASE_URL points at the catalog API,
//! PORT mirrors the deployment port.

use std::env;

/// Default catalog API address
pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

/// Default deployment port
pub const DEFAULT_PORT: u16 = 5000;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the CID catalog API
    pub base_url: String,
    /// Deployment port, logged for parity; the client opens no socket
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Load configuration from the process environment, falling back to
    /// defaults on absent or unparsable values
    pub fn from_env() -> Self {
        Self {
            base_url: normalize_base_url(&env_string("BASE_URL", DEFAULT_BASE_URL)),
            port: env_u16("PORT", DEFAULT_PORT),
        }
    }

    /// Replace the base URL (CLI override)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }
}

/// Strip surrounding whitespace and any trailing slash so `{base_url}/cids`
/// stays well-formed
fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

fn env_string(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:3333");
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_env_u16_absent_uses_default() {
        assert_eq!(env_u16("CIDEX_TEST_PORT_ABSENT", 5000), 5000);
    }

    #[test]
    fn test_env_u16_unparsable_uses_default() {
        env::set_var("CIDEX_TEST_PORT_BAD", "not-a-port");
        assert_eq!(env_u16("CIDEX_TEST_PORT_BAD", 5000), 5000);
        env::remove_var("CIDEX_TEST_PORT_BAD");
    }

    #[test]
    fn test_env_u16_parses_value() {
        env::set_var("CIDEX_TEST_PORT_OK", "8080");
        assert_eq!(env_u16("CIDEX_TEST_PORT_OK", 5000), 8080);
        env::remove_var("CIDEX_TEST_PORT_OK");
    }

    #[test]
    fn test_normalize_base_url_strips_trailing_slash() {
        assert_eq!(normalize_base_url("http://api.local/"), "http://api.local");
        assert_eq!(
            normalize_base_url("  http://api.local  "),
            "http://api.local"
        );
        assert_eq!(normalize_base_url(""), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_with_base_url_override() {
        let config = Config::default().with_base_url("http://10.0.0.2:9000/");
        assert_eq!(config.base_url, "http://10.0.0.2:9000");
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
