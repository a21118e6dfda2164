//! The search client: entry points, empty-keyword short-circuit, cache wiring.

use serde_json::Value;

use crate::backend::SearchBackend;
use crate::cache::ResponseCache;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpBackend;
use crate::options::SearchOptions;
use crate::query::SearchRequest;
use crate::response::{self, Page, Record};

/// Page size forced by [`SearchClient::search_mini`].
const MINI_PAGE_SIZE: u32 = 300;
/// Fields forced by [`SearchClient::search_mini`].
const MINI_FIELDS: &[&str] = &["id", "title"];

/// Asynchronous client for a hosted keyword-search backend.
///
/// Explicitly constructed and owned by the caller — there is no implicit
/// process-wide instance and no construction race. Construction validates
/// the configuration eagerly and fails with a 400-status config error
/// before any network activity.
///
/// Every entry point treats an empty (or whitespace-only) keyword as a
/// deliberate no-op: the backend is not called and the mode's empty shape
/// is returned.
#[derive(Debug)]
pub struct SearchClient<B = HttpBackend> {
    config: ClientConfig,
    backend: B,
    cache: Option<ResponseCache>,
}

impl SearchClient<HttpBackend> {
    /// Create a client backed by the bundled HTTP adapter.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`](crate::SearchError::Config) when
    /// credentials, the active endpoint, or the application name are
    /// missing or invalid.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let backend = HttpBackend::new(&config)?;
        Ok(Self::assemble(config, backend))
    }
}

impl<B: SearchBackend> SearchClient<B> {
    /// Create a client with an injected backend.
    ///
    /// This is the seam for substituting transports (and the test seam);
    /// configuration is validated the same way as [`SearchClient::new`].
    pub fn with_backend(config: ClientConfig, backend: B) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config, backend))
    }

    fn assemble(config: ClientConfig, backend: B) -> Self {
        let cache =
            (config.cache_ttl_seconds > 0).then(|| ResponseCache::new(config.cache_ttl_seconds));
        Self {
            config,
            backend,
            cache,
        }
    }

    /// Raw passthrough search: the backend's decoded JSON, unmodified.
    ///
    /// An empty keyword returns an empty JSON object without calling the
    /// backend.
    pub async fn search(&self, keyword: &str, options: &SearchOptions) -> Result<Value> {
        if keyword.trim().is_empty() {
            return Ok(Value::Object(Default::default()));
        }
        let request = SearchRequest::build(keyword, options, &self.config);
        self.execute(request).await
    }

    /// Paginated search: `{items, has_more}` envelope.
    ///
    /// `has_more` follows the returned-count heuristic documented on
    /// [`Page`]; an unexpected response shape yields an empty page rather
    /// than an error.
    pub async fn search_page(&self, keyword: &str, options: &SearchOptions) -> Result<Page> {
        if keyword.trim().is_empty() {
            return Ok(Page::default());
        }
        let request = SearchRequest::build(keyword, options, &self.config);
        let hits = request.hits;
        let response = self.execute(request).await?;
        Ok(response::page(&response, hits))
    }

    /// Flat ordered item list; the first 100 results when no pagination is
    /// given.
    pub async fn search_list(&self, keyword: &str, options: &SearchOptions) -> Result<Vec<Record>> {
        if keyword.trim().is_empty() {
            return Ok(Vec::new());
        }
        let request = SearchRequest::build(keyword, options, &self.config);
        let response = self.execute(request).await?;
        Ok(response::items(&response))
    }

    /// Identifier search: forces `fields=[id, title]`, `page_size=300`,
    /// `page=0`, irrespective of caller-supplied pagination or field
    /// selection. Filter and sort pass through unchanged.
    pub async fn search_mini(&self, keyword: &str, options: &SearchOptions) -> Result<Page> {
        let mini = SearchOptions {
            page: 0,
            page_size: MINI_PAGE_SIZE,
            fields: MINI_FIELDS.iter().map(|field| field.to_string()).collect(),
            ..options.clone()
        };
        self.search_page(keyword, &mini).await
    }

    /// Execute a built request through the cache and backend.
    async fn execute(&self, request: SearchRequest) -> Result<Value> {
        tracing::trace!(query = %request.clause(), "executing search");

        let key = request.cache_key();
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(&key).await {
                tracing::debug!("response served from cache");
                return Ok(hit);
            }
        }

        let response = self.backend.execute(&request).await?;

        if let Some(cache) = &self.cache {
            cache.insert(key, response.clone()).await;
        }
        Ok(response)
    }
}
