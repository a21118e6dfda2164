//! Trait seam between the client and the search backend transport.
//!
//! The backend is an external collaborator: this crate builds validated
//! requests and normalises responses, while execution — the one network
//! round trip per invocation — happens behind [`SearchBackend`]. The
//! bundled [`HttpBackend`](crate::http::HttpBackend) speaks to a real
//! service; tests substitute mock implementations.

use crate::error::SearchError;
use crate::query::SearchRequest;
use serde_json::Value;

/// An executor for built search queries.
///
/// Implementations perform exactly one round trip per `execute` call and
/// let every transport or backend error propagate unchanged — no retry,
/// no translation, no partial-result recovery.
///
/// All implementations must be `Send + Sync` so a client can be shared
/// across tasks.
pub trait SearchBackend: Send + Sync {
    /// Execute a built query and return the backend's decoded JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the request fails in transport, the
    /// backend answers with a non-success status, or the response body is
    /// not valid JSON.
    fn execute(
        &self,
        request: &SearchRequest,
    ) -> impl std::future::Future<Output = Result<Value, SearchError>> + Send;
}
