//! Error types for the opal-search crate.
//!
//! All errors use stable string messages suitable for display and
//! programmatic handling. Credentials never appear in error messages.

/// Errors that can occur during search operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The client configuration is incomplete or invalid.
    ///
    /// Raised eagerly at client construction, before any network call.
    #[error("config error: {0}")]
    Config(String),

    /// An HTTP request to the search backend failed in transport.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The backend answered with a non-success status.
    #[error("backend error (status {status}): {body}")]
    Backend {
        /// Upstream HTTP status code.
        status: u16,
        /// Upstream response body, verbatim.
        body: String,
    },

    /// The backend response could not be decoded as JSON.
    #[error("decode error: {0}")]
    Decode(String),
}

impl SearchError {
    /// HTTP-equivalent status code for this error, where one applies.
    ///
    /// Configuration errors carry the fixed 400 code; backend errors
    /// carry the upstream status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Config(_) => Some(400),
            Self::Backend { status, .. } => Some(*status),
            Self::Http(_) | Self::Decode(_) => None,
        }
    }
}

/// Convenience type alias for opal-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_config() {
        let err = SearchError::Config("app_name is not configured".into());
        assert_eq!(err.to_string(), "config error: app_name is not configured");
    }

    #[test]
    fn display_http() {
        let err = SearchError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_backend() {
        let err = SearchError::Backend {
            status: 502,
            body: "bad gateway".into(),
        };
        assert_eq!(err.to_string(), "backend error (status 502): bad gateway");
    }

    #[test]
    fn display_decode() {
        let err = SearchError::Decode("unexpected end of input".into());
        assert_eq!(err.to_string(), "decode error: unexpected end of input");
    }

    #[test]
    fn config_errors_carry_status_400() {
        let err = SearchError::Config("missing secret".into());
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn backend_errors_carry_upstream_status() {
        let err = SearchError::Backend {
            status: 503,
            body: String::new(),
        };
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn transport_errors_have_no_status() {
        assert_eq!(SearchError::Http("timeout".into()).status(), None);
        assert_eq!(SearchError::Decode("bad json".into()).status(), None);
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
