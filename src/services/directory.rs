// src/services/directory.rs

//! Time-boxed cache over the services-directory scrape.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::error::Result;
use crate::models::{ScraperConfig, ServiceEntry};
use crate::services::extractor::parse_services;
use crate::utils::http::{create_async_client, fetch_html};

/// One cached directory listing. Overwritten wholesale on refresh.
#[derive(Debug, Clone)]
struct CacheEntry {
    items: Vec<ServiceEntry>,
    expires_at: DateTime<Utc>,
}

impl CacheEntry {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Fetches, parses, and caches the campus services directory.
///
/// The cache slot is guarded by an async mutex held across the refresh,
/// so concurrent misses coalesce into a single upstream fetch
/// (single-flight). A hit never performs network I/O.
pub struct ServiceDirectory {
    config: ScraperConfig,
    client: reqwest::Client,
    cache: Mutex<Option<CacheEntry>>,
}

impl ServiceDirectory {
    /// Create a directory service with the given scraper settings.
    pub fn new(config: ScraperConfig) -> Result<Self> {
        let client = create_async_client(&config.user_agent, config.timeout_secs)?;
        Ok(Self {
            config,
            client,
            cache: Mutex::new(None),
        })
    }

    /// Return the full directory listing, refreshing the cache if stale.
    pub async fn get_all_services(&self) -> Result<Vec<ServiceEntry>> {
        let mut slot = self.cache.lock().await;
        let now = Utc::now();

        if let Some(entry) = slot.as_ref() {
            if entry.is_fresh(now) {
                log::debug!("Directory cache hit ({} items)", entry.items.len());
                return Ok(entry.items.clone());
            }
        }

        log::info!("Refreshing services directory from {}", self.config.services_url);
        let html = fetch_html(&self.client, &self.config.services_url).await?;
        let items = parse_services(&html, &self.config.services_url);
        log::info!("Extracted {} service entries", items.len());

        let ttl = Duration::from_secs(self.config.cache_ttl_secs);
        *slot = Some(CacheEntry {
            items: items.clone(),
            expires_at: now + ttl,
        });

        Ok(items)
    }

    /// Drop the cached listing, forcing a refetch on the next call.
    pub async fn invalidate(&self) {
        *self.cache.lock().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> CacheEntry {
        CacheEntry {
            items: vec![ServiceEntry::new("A", "https://x.edu/a")],
            expires_at: Utc::now() + Duration::from_secs(60),
        }
    }

    #[test]
    fn test_fresh_within_ttl() {
        let e = entry();
        assert!(e.is_fresh(Utc::now()));
    }

    #[test]
    fn test_stale_after_expiry() {
        let e = entry();
        assert!(!e.is_fresh(e.expires_at + Duration::from_secs(1)));
    }
}
