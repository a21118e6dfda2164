//! Client configuration with eager validation.
//!
//! [`ClientConfig`] carries the credentials and endpoints supplied once at
//! construction time. Validation runs before any network call and fails
//! with a 400-status [`SearchError::Config`] when required fields are
//! missing.

use crate::error::SearchError;
use url::Url;

/// Which of the two configured endpoints the client talks to.
///
/// Fixed at client construction; a client never switches endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deployment {
    /// Running inside the backend's network; use `internal_endpoint`.
    Internal,
    /// Running on the public network; use `external_endpoint`.
    External,
}

/// Configuration for a search client.
///
/// Supplied once, immutable afterwards. Use [`Default::default()`] and
/// struct-update syntax to fill in the fields that matter.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Access key identifier for request signing.
    pub access_key_id: String,
    /// Signing secret. Never logged, never placed in URLs.
    pub secret: String,
    /// Endpoint used for [`Deployment::Internal`] clients.
    pub internal_endpoint: String,
    /// Endpoint used for [`Deployment::External`] clients.
    pub external_endpoint: String,
    /// Name of the search application to query.
    pub app_name: String,
    /// Reserved for the suggestion endpoint; search operations do not read it.
    pub suggest_name: String,
    /// Query-processor chain to attach to every request, if any.
    pub query_processor: Option<String>,
    /// Deployment context deciding which endpoint is used.
    pub deployment: Deployment,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// How long to cache raw responses, in seconds. 0 disables caching.
    pub cache_ttl_seconds: u64,
    /// Custom User-Agent string. `None` uses the crate default.
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            access_key_id: String::new(),
            secret: String::new(),
            internal_endpoint: String::new(),
            external_endpoint: String::new(),
            app_name: String::new(),
            suggest_name: String::new(),
            query_processor: None,
            deployment: Deployment::Internal,
            timeout_seconds: 10,
            cache_ttl_seconds: 0,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// The endpoint selected by the deployment context.
    pub fn endpoint(&self) -> &str {
        match self.deployment {
            Deployment::Internal => &self.internal_endpoint,
            Deployment::External => &self.external_endpoint,
        }
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `access_key_id`, `secret`, and `app_name` must be non-empty
    /// - the endpoint selected by `deployment` must be non-empty and a
    ///   parseable URL
    /// - `timeout_seconds` must be greater than 0
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.access_key_id.is_empty() {
            return Err(SearchError::Config("access_key_id is not configured".into()));
        }
        if self.secret.is_empty() {
            return Err(SearchError::Config("secret is not configured".into()));
        }
        if self.app_name.is_empty() {
            return Err(SearchError::Config("app_name is not configured".into()));
        }
        if self.endpoint().is_empty() {
            return Err(SearchError::Config(format!(
                "no endpoint configured for the {:?} deployment",
                self.deployment
            )));
        }
        if let Err(e) = Url::parse(self.endpoint()) {
            return Err(SearchError::Config(format!("endpoint is not a valid URL: {e}")));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config("timeout_seconds must be greater than 0".into()));
        }
        Ok(())
    }
}
