//! Query builder: maps a keyword and typed options into a backend request.
//!
//! The backend consumes one composite `query` parameter made of
//! `&&`-joined clauses (keyword, pagination config, filter, sort) plus
//! side parameters for field selection and query processing. [`SearchRequest`]
//! holds the validated pieces and renders the wire forms.

use crate::config::ClientConfig;
use crate::options::{SearchOptions, SortKey};

/// Output format requested from the backend. Fixed.
const FORMAT: &str = "json";

/// A fully-built backend query, ready for execution.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Search application to query.
    pub app_name: String,
    /// Offset of the first hit: `page * page_size`.
    pub start: u64,
    /// Number of hits to return: `page_size`.
    pub hits: u32,
    /// Keyword clause against the default index.
    pub query: String,
    /// Rendered filter expression, if any.
    pub filter: Option<String>,
    /// Sort directives in wire order.
    pub sort: Vec<SortKey>,
    /// Fields to fetch. Empty means the backend's default set.
    pub fetch_fields: Vec<String>,
    /// Query-processor chain, attached when the client is configured with one.
    pub query_processor: Option<String>,
}

impl SearchRequest {
    /// Build a request from a non-empty keyword, per-call options, and
    /// client configuration.
    ///
    /// Empty keywords never reach the builder; entry points short-circuit
    /// to an empty result first.
    pub fn build(keyword: &str, options: &SearchOptions, config: &ClientConfig) -> Self {
        Self {
            app_name: config.app_name.clone(),
            start: u64::from(options.page) * u64::from(options.page_size),
            hits: options.page_size,
            query: format!("default:'{keyword}'"),
            filter: options.filter.as_ref().map(|filter| filter.render()),
            sort: options.sort.clone(),
            fetch_fields: options.fields.clone(),
            query_processor: config.query_processor.clone(),
        }
    }

    /// Render the composite `query` parameter the backend consumes.
    ///
    /// Clauses are `&&`-joined: keyword, then `config=start:N,hit:N,format:json`,
    /// then filter and sort when present.
    pub fn clause(&self) -> String {
        let mut clauses = vec![
            format!("query={}", self.query),
            format!("config=start:{},hit:{},format:{FORMAT}", self.start, self.hits),
        ];
        if let Some(filter) = &self.filter {
            clauses.push(format!("filter={filter}"));
        }
        if !self.sort.is_empty() {
            let rendered: Vec<String> = self.sort.iter().map(SortKey::render).collect();
            clauses.push(format!("sort={}", rendered.join(";")));
        }
        clauses.join("&&")
    }

    /// Fetch-field list in wire form (`;`-separated), if any fields are set.
    pub fn fetch_fields_param(&self) -> Option<String> {
        if self.fetch_fields.is_empty() {
            None
        } else {
            Some(self.fetch_fields.join(";"))
        }
    }

    /// Deterministic cache key covering every request-shaping input.
    pub fn cache_key(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.app_name,
            self.clause(),
            self.fetch_fields_param().unwrap_or_default(),
            self.query_processor.as_deref().unwrap_or_default(),
        )
    }
}
