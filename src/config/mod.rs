#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use std::env;

pub const API_URL_ENV: &str = "WORDPRESS_API_URL";
pub const DEFAULT_API_URL: &str = "https://your-wordpress-site.com/wp-json";

/// Configuration resolved from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub api_base_url: String,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_value(env::var(API_URL_ENV).ok())
    }

    /// Unset or blank values fall back to [`DEFAULT_API_URL`].
    pub fn from_value(value: Option<String>) -> Self {
        let api_base_url = match explicit_url(value) {
            Some(v) => v,
            None => {
                tracing::warn!(
                    "{} is not set, using placeholder {}",
                    API_URL_ENV,
                    DEFAULT_API_URL
                );
                DEFAULT_API_URL.to_string()
            }
        };

        Self { api_base_url }
    }
}

// The configured URL, or `None` when the fallback applies.
fn explicit_url(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::from_value(None)
    }
}

impl ConfigProvider for EnvConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

impl Validate for EnvConfig {
    fn validate(&self) -> Result<()> {
        validate_url(API_URL_ENV, &self.api_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_config_falls_back_to_placeholder() {
        assert_eq!(EnvConfig::from_value(None).api_base_url, DEFAULT_API_URL);
        assert_eq!(
            EnvConfig::from_value(Some("   ".to_string())).api_base_url,
            DEFAULT_API_URL
        );
        assert_eq!(EnvConfig::default().api_base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_placeholder_set_explicitly_is_not_a_fallback() {
        assert_eq!(
            explicit_url(Some(DEFAULT_API_URL.to_string())),
            Some(DEFAULT_API_URL.to_string())
        );
        assert_eq!(explicit_url(Some(" \t".to_string())), None);
        assert_eq!(explicit_url(None), None);
    }

    #[test]
    fn test_env_config_uses_value() {
        let config = EnvConfig::from_value(Some(" https://blog.test/wp-json ".to_string()));

        assert_eq!(config.api_base_url(), "https://blog.test/wp-json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_config_rejects_bad_url() {
        let config = EnvConfig::from_value(Some("blog.test".to_string()));

        assert!(config.validate().is_err());
    }
}
