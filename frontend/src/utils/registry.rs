use std::cell::RefCell;
use std::collections::HashMap;

use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use thiserror::Error;
use web_sys::js_sys::Date;

pub const NPM_REGISTRY: &str = "https://registry.npmjs.org";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Serve the cached body for this many seconds; `None` caches forever.
    pub revalidate_secs: Option<u64>,
    pub timeout_ms: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            revalidate_secs: Some(3600),
            timeout_ms: 5_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("network error: {0}")]
    Network(String),
    #[error("registry returned status {0}")]
    Status(u16),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("unexpected response: {0}")]
    Decode(String),
}

#[derive(Clone, Debug, PartialEq)]
struct CacheEntry {
    body: String,
    fetched_at_ms: f64,
}

impl CacheEntry {
    fn is_fresh(&self, now_ms: f64, revalidate_secs: Option<u64>) -> bool {
        match revalidate_secs {
            None => true,
            Some(secs) => now_ms - self.fetched_at_ms < secs as f64 * 1000.0,
        }
    }
}

/// Response bodies keyed by URL.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<String, CacheEntry>,
}

impl ResponseCache {
    pub fn get_fresh(&self, url: &str, now_ms: f64, options: &FetchOptions) -> Option<String> {
        self.entries
            .get(url)
            .filter(|entry| entry.is_fresh(now_ms, options.revalidate_secs))
            .map(|entry| entry.body.clone())
    }

    pub fn insert(&mut self, url: &str, body: String, now_ms: f64) {
        self.entries.insert(
            url.to_string(),
            CacheEntry {
                body,
                fetched_at_ms: now_ms,
            },
        );
    }
}

thread_local! {
    static CACHE: RefCell<ResponseCache> = RefCell::new(ResponseCache::default());
}

/// GET `url`, served from the cache while it is fresh.
pub async fn fetch_cached(url: &str, options: FetchOptions) -> Result<String, RegistryError> {
    let now = Date::now();
    if let Some(body) = CACHE.with(|cache| cache.borrow().get_fresh(url, now, &options)) {
        log::debug!("Cache hit for {}", url);
        return Ok(body);
    }

    let request = Box::pin(Request::get(url).send());
    let timeout = Box::pin(TimeoutFuture::new(options.timeout_ms));
    let response = match select(request, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| RegistryError::Network(e.to_string()))?,
        Either::Right(_) => return Err(RegistryError::Timeout(options.timeout_ms)),
    };
    if !response.ok() {
        return Err(RegistryError::Status(response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|e| RegistryError::Decode(e.to_string()))?;

    CACHE.with(|cache| cache.borrow_mut().insert(url, body.clone(), Date::now()));
    Ok(body)
}

#[derive(Deserialize)]
struct LatestManifest {
    version: String,
}

pub fn parse_latest_version(body: &str) -> Result<String, RegistryError> {
    serde_json::from_str::<LatestManifest>(body)
        .map(|manifest| manifest.version)
        .map_err(|e| RegistryError::Decode(e.to_string()))
}

pub async fn latest_version(package: &str, options: FetchOptions) -> Result<String, RegistryError> {
    let url = format!("{}/{}/latest", NPM_REGISTRY, package);
    let body = fetch_cached(&url, options).await?;
    parse_latest_version(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://registry.npmjs.org/example/latest";

    #[test]
    fn fresh_entries_are_served() {
        let mut cache = ResponseCache::default();
        cache.insert(URL, "body".to_string(), 1_000.0);
        let options = FetchOptions { revalidate_secs: Some(60), timeout_ms: 1_000 };
        assert_eq!(cache.get_fresh(URL, 30_000.0, &options).as_deref(), Some("body"));
    }

    #[test]
    fn stale_entries_are_revalidated() {
        let mut cache = ResponseCache::default();
        cache.insert(URL, "body".to_string(), 1_000.0);
        let options = FetchOptions { revalidate_secs: Some(60), timeout_ms: 1_000 };
        assert_eq!(cache.get_fresh(URL, 61_000.0, &options), None);
    }

    #[test]
    fn no_revalidate_caches_forever() {
        let mut cache = ResponseCache::default();
        cache.insert(URL, "body".to_string(), 0.0);
        let options = FetchOptions { revalidate_secs: None, timeout_ms: 1_000 };
        assert!(cache.get_fresh(URL, f64::MAX, &options).is_some());
    }

    #[test]
    fn entries_are_keyed_by_url() {
        let mut cache = ResponseCache::default();
        cache.insert(URL, "body".to_string(), 0.0);
        assert!(cache.get_fresh("https://registry.npmjs.org/other/latest", 0.0, &FetchOptions::default()).is_none());
    }

    #[test]
    fn parses_latest_manifest() {
        let body = r#"{"name":"example","version":"4.2.0","license":"MIT"}"#;
        assert_eq!(parse_latest_version(body), Ok("4.2.0".to_string()));
        assert!(matches!(parse_latest_version("{}"), Err(RegistryError::Decode(_))));
    }

    #[test]
    fn errors_read_well() {
        assert_eq!(RegistryError::Timeout(5000).to_string(), "request timed out after 5000 ms");
        assert_eq!(RegistryError::Status(404).to_string(), "registry returned status 404");
    }
}
