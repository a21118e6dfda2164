//! # opal-search
//!
//! Typed async client for hosted keyword-search backends.
//!
//! A thin, explicit façade over an application-search HTTP API: it builds
//! validated query requests from typed options, executes them through a
//! pluggable backend adapter, and normalises the JSON responses into
//! pagination-friendly shapes.
//!
//! ## Design
//!
//! - One consolidated query path with three output modes: raw JSON
//!   passthrough, flat item list, and `{items, has_more}` envelope
//! - Explicitly constructed client owned by the caller — no process-wide
//!   singleton, no hidden construction race
//! - Typed options and errors; backend and transport failures propagate
//!   unchanged through the `Result` channel, with no retry layer
//! - Unexpected response shapes and empty keywords normalise to empty
//!   results, never to errors
//! - Optional in-memory TTL response cache (disabled by default)
//!
//! ## Security
//!
//! - Requests are signed with HMAC-SHA256; the secret never appears in
//!   URLs, logs, or error messages
//! - Search keywords are logged only at trace level
//!
//! ## Examples
//!
//! ```no_run
//! # async fn example() -> opal_search::Result<()> {
//! use opal_search::{ClientConfig, Deployment, SearchClient, SearchOptions};
//!
//! let config = ClientConfig {
//!     access_key_id: "key".into(),
//!     secret: "secret".into(),
//!     external_endpoint: "https://search.example.com".into(),
//!     app_name: "articles".into(),
//!     deployment: Deployment::External,
//!     ..Default::default()
//! };
//! let client = SearchClient::new(config)?;
//!
//! let page = client.search_page("rust", &SearchOptions::default()).await?;
//! println!("{} items, more: {}", page.items.len(), page.has_more);
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod options;
pub mod query;
pub mod response;
pub mod sign;

pub use backend::SearchBackend;
pub use client::SearchClient;
pub use config::{ClientConfig, Deployment};
pub use error::{Result, SearchError};
pub use http::HttpBackend;
pub use options::{split_fields, Filter, SearchOptions, SortKey};
pub use query::SearchRequest;
pub use response::{Page, Record};
