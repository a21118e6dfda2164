//! HTTP backend adapter over a shared [`reqwest::Client`].
//!
//! [`HttpBackend`] executes built queries against the endpoint selected by
//! the deployment context at construction time. Each call is exactly one
//! signed GET round trip: no retry, no failure recovery, errors surface
//! unchanged as typed values.

use crate::backend::SearchBackend;
use crate::config::ClientConfig;
use crate::error::SearchError;
use crate::query::SearchRequest;
use crate::sign;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Default User-Agent when the config does not override it.
const USER_AGENT: &str = concat!("opal-search/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] configured for backend requests.
///
/// The client has:
/// - Timeout from config
/// - The crate User-Agent (or custom if configured)
/// - Brotli and gzip decompression
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &ClientConfig) -> Result<reqwest::Client, SearchError> {
    let ua = match config.user_agent {
        Some(ref custom) => custom.clone(),
        None => USER_AGENT.to_owned(),
    };

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

/// HTTP adapter executing queries against the configured endpoint.
#[derive(Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: Url,
    access_key_id: String,
    secret: String,
}

impl HttpBackend {
    /// Create an adapter for the endpoint selected by `config.deployment`.
    ///
    /// The endpoint choice is fixed for the adapter's lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the selected endpoint is not a
    /// valid URL, or [`SearchError::Http`] if the HTTP client cannot be
    /// built.
    pub fn new(config: &ClientConfig) -> Result<Self, SearchError> {
        let endpoint = Url::parse(config.endpoint())
            .map_err(|e| SearchError::Config(format!("endpoint is not a valid URL: {e}")))?;
        Ok(Self {
            client: build_client(config)?,
            endpoint,
            access_key_id: config.access_key_id.clone(),
            secret: config.secret.clone(),
        })
    }
}

/// Path of the search operation for a request's application.
fn search_path(request: &SearchRequest) -> String {
    format!("/v3/openapi/apps/{}/search", request.app_name)
}

/// Assemble the HTTP query parameters for a built request.
///
/// Extracted as a separate function for testability without a network.
fn request_params(request: &SearchRequest) -> Vec<(String, String)> {
    let mut params = vec![("query".to_string(), request.clause())];
    if let Some(fields) = request.fetch_fields_param() {
        params.push(("fetch_fields".to_string(), fields));
    }
    if let Some(qp) = &request.query_processor {
        params.push(("qp".to_string(), qp.clone()));
    }
    params
}

impl SearchBackend for HttpBackend {
    async fn execute(&self, request: &SearchRequest) -> Result<Value, SearchError> {
        let path = search_path(request);
        let url = self
            .endpoint
            .join(&path)
            .map_err(|e| SearchError::Http(format!("failed to build request URL: {e}")))?;
        let params = request_params(request);

        let date = chrono::Utc::now().to_rfc3339();
        let nonce = sign::nonce();
        let signature = sign::signature(&self.secret, "GET", &path, &params, &date, &nonce);

        tracing::trace!(path = %path, "backend request");

        let response = self
            .client
            .get(url)
            .query(&params)
            .header("Accept", "application/json")
            .header(sign::DATE_HEADER, date.as_str())
            .header(sign::NONCE_HEADER, nonce.as_str())
            .header("Authorization", sign::authorization(&self.access_key_id, &signature))
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("backend request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("backend response read failed: {e}")))?;

        tracing::trace!(status = %status, bytes = body.len(), "backend response received");

        if !status.is_success() {
            return Err(SearchError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| SearchError::Decode(format!("backend response is not valid JSON: {e}")))
    }
}
