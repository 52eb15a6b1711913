//! Payload signatures shared with the client-side payment invocation.
//!
//! Both functions are pure: identical inputs always give identical output,
//! there is no timestamp or nonce involved. The remote verifier recomputes
//! them over the exact bytes it receives, so `body` must be the serialized
//! request as transmitted, never a re-encoded copy.

use crate::hash::hmac_sha256_parts;

/// Compute `pay_sig`: hex HMAC-SHA256 keyed by `app_key` over `uri + "&" + body`.
///
/// `uri` is the API path the body is submitted to, e.g. `/retail/B2b/getorder`,
/// without host or query.
pub fn pay_sig(uri: &str, body: &[u8], app_key: &str) -> String {
    hex::encode(hmac_sha256_parts(
        app_key.as_bytes(),
        &[uri.as_bytes(), b"&", body],
    ))
}

/// Compute the user signature: hex HMAC-SHA256 keyed by `session_key` over `body`.
///
/// Unlike [`pay_sig`], the message is the body alone.
pub fn user_signature(body: &[u8], session_key: &str) -> String {
    hex::encode(hmac_sha256_parts(session_key.as_bytes(), &[body]))
}
