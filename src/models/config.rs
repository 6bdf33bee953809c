//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Services-directory scraping settings
    #[serde(default)]
    pub scraper: ScraperConfig,

    /// LMS course-catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Session token settings
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.scraper.services_url.trim().is_empty() {
            return Err(AppError::validation("scraper.services_url is empty"));
        }
        if self.scraper.user_agent.trim().is_empty() {
            return Err(AppError::validation("scraper.user_agent is empty"));
        }
        if self.scraper.timeout_secs == 0 {
            return Err(AppError::validation("scraper.timeout_secs must be > 0"));
        }
        if self.scraper.cache_ttl_secs == 0 {
            return Err(AppError::validation("scraper.cache_ttl_secs must be > 0"));
        }
        if self.catalog.base_url.trim().is_empty() {
            return Err(AppError::validation("catalog.base_url is empty"));
        }
        if self.catalog.per_page == 0 || self.catalog.per_page > 100 {
            return Err(AppError::validation(
                "catalog.per_page must be in 1..=100",
            ));
        }
        if self.catalog.timeout_secs == 0 {
            return Err(AppError::validation("catalog.timeout_secs must be > 0"));
        }
        if self.session.ttl_secs == 0 {
            return Err(AppError::validation("session.ttl_secs must be > 0"));
        }
        Ok(())
    }
}

/// Services-directory scraping settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// URL of the services-and-programs directory page
    #[serde(default = "defaults::services_url")]
    pub services_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::scrape_timeout")]
    pub timeout_secs: u64,

    /// How long a fetched directory listing stays fresh
    #[serde(default = "defaults::cache_ttl")]
    pub cache_ttl_secs: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            services_url: defaults::services_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::scrape_timeout(),
            cache_ttl_secs: defaults::cache_ttl(),
        }
    }
}

/// LMS course-catalog API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the LMS instance
    #[serde(default = "defaults::catalog_base_url")]
    pub base_url: String,

    /// Page size requested from the catalog API
    #[serde(default = "defaults::catalog_per_page")]
    pub per_page: u32,

    /// Per-request timeout in seconds
    #[serde(default = "defaults::catalog_timeout")]
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::catalog_base_url(),
            per_page: defaults::catalog_per_page(),
            timeout_secs: defaults::catalog_timeout(),
        }
    }
}

/// Session token settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// How long an issued session token stays valid
    #[serde(default = "defaults::session_ttl")]
    pub ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: defaults::session_ttl(),
        }
    }
}

/// Default value functions for serde.
mod defaults {
    pub fn services_url() -> String {
        "https://sacd.sdsu.edu/cps/our-services-and-programs".to_string()
    }

    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
         AppleWebKit/537.36 (KHTML, like Gecko) \
         Chrome/124.0 Safari/537.36"
            .to_string()
    }

    pub fn scrape_timeout() -> u64 {
        30
    }

    pub fn cache_ttl() -> u64 {
        60 * 60 * 12
    }

    pub fn catalog_base_url() -> String {
        "https://sdsu.instructure.com".to_string()
    }

    pub fn catalog_per_page() -> u32 {
        100
    }

    pub fn catalog_timeout() -> u64 {
        10
    }

    pub fn session_ttl() -> u64 {
        60 * 60 * 24
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_ttl() {
        let mut config = Config::default();
        config.scraper.cache_ttl_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_per_page() {
        let mut config = Config::default();
        config.catalog.per_page = 500;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [catalog]
            base_url = "https://lms.example.edu"
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog.base_url, "https://lms.example.edu");
        assert_eq!(config.catalog.per_page, 100);
        assert_eq!(config.scraper.cache_ttl_secs, 60 * 60 * 12);
    }
}
