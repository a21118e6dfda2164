//! Request signing for the HTTP backend.
//!
//! Each request carries a UTC timestamp, a random nonce, and an
//! `Authorization` header holding a base64-encoded HMAC-SHA256 signature
//! over a canonical string of the request. The secret itself never leaves
//! the process.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the request timestamp (UTC, RFC 3339).
pub const DATE_HEADER: &str = "x-search-date";
/// Header carrying the per-request nonce.
pub const NONCE_HEADER: &str = "x-search-nonce";

/// Compute the request signature.
///
/// The canonical string is the method, date, nonce, path, and the `k=v`
/// query pairs sorted lexicographically, joined with newlines. Pairs are
/// signed in sorted order so parameter ordering on the wire does not
/// affect the signature.
pub fn signature(
    secret: &str,
    method: &str,
    path: &str,
    query: &[(String, String)],
    date: &str,
    nonce: &str,
) -> String {
    let mut pairs: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
    pairs.sort();
    let canonical = format!("{method}\n{date}\n{nonce}\n{path}\n{}", pairs.join("&"));

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(canonical.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

/// `Authorization` header value for a computed signature.
pub fn authorization(access_key_id: &str, signature: &str) -> String {
    format!("SEARCH {access_key_id}:{signature}")
}

/// Random per-request nonce, 32 hex characters.
pub fn nonce() -> String {
    format!("{:032x}", rand::thread_rng().gen::<u128>())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> Vec<(String, String)> {
        vec![
            ("query".into(), "default:'rust'".into()),
            ("fetch_fields".into(), "id;title".into()),
        ]
    }

    #[test]
    fn signature_deterministic_for_fixed_inputs() {
        let first = signature("sekrit", "GET", "/v3/openapi/apps/articles/search", &query(), "2026-01-01T00:00:00+00:00", "abc123");
        let second = signature("sekrit", "GET", "/v3/openapi/apps/articles/search", &query(), "2026-01-01T00:00:00+00:00", "abc123");
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn signature_changes_with_secret() {
        let first = signature("sekrit", "GET", "/p", &query(), "d", "n");
        let second = signature("other", "GET", "/p", &query(), "d", "n");
        assert_ne!(first, second);
    }

    #[test]
    fn signature_changes_with_nonce() {
        let first = signature("sekrit", "GET", "/p", &query(), "d", "n1");
        let second = signature("sekrit", "GET", "/p", &query(), "d", "n2");
        assert_ne!(first, second);
    }

    #[test]
    fn signature_independent_of_query_order() {
        let forward = query();
        let mut reversed = query();
        reversed.reverse();
        let first = signature("sekrit", "GET", "/p", &forward, "d", "n");
        let second = signature("sekrit", "GET", "/p", &reversed, "d", "n");
        assert_eq!(first, second);
    }

    #[test]
    fn authorization_format() {
        assert_eq!(authorization("AKID", "c2ln"), "SEARCH AKID:c2ln");
    }

    #[test]
    fn nonce_is_32_hex_chars() {
        let nonce = nonce();
        assert_eq!(nonce.len(), 32);
        assert!(nonce.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn nonces_differ_between_calls() {
        assert_ne!(nonce(), nonce());
    }
}
