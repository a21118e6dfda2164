//! Per-client TTL cache for raw backend responses.
//!
//! Built on [`moka`] for async-friendly caching with automatic eviction.
//! The cache is owned by the client instance — there is no process-wide
//! store, so two clients with different configurations never share
//! entries. Keys are rendered by
//! [`SearchRequest::cache_key`](crate::query::SearchRequest::cache_key)
//! and cover every request-shaping input.

use moka::future::Cache;
use serde_json::Value;
use std::time::Duration;

/// Maximum number of cached responses per client.
const MAX_CACHE_ENTRIES: u64 = 100;

/// TTL cache of raw backend responses keyed by the rendered request.
#[derive(Debug)]
pub struct ResponseCache {
    inner: Cache<String, Value>,
}

impl ResponseCache {
    /// Create a cache whose entries expire after `ttl_seconds`.
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(MAX_CACHE_ENTRIES)
                .time_to_live(Duration::from_secs(ttl_seconds))
                .build(),
        }
    }

    /// Look up a cached response. `None` on miss.
    pub async fn get(&self, key: &str) -> Option<Value> {
        self.inner.get(key).await
    }

    /// Insert a response under the given key.
    pub async fn insert(&self, key: String, response: Value) {
        self.inner.insert(key, response).await;
    }
}
