//! Authorized URI construction.
//!
//! The access token and the signature are appended as query parameters, in
//! that order, after whatever the path already carries. The token is never
//! part of the signed message.

use crate::sign::pay_sig;

/// Query parameter carrying the access token.
pub const ACCESS_TOKEN: &str = "access_token";
/// Query parameter carrying the [`pay_sig`] signature.
pub const PAY_SIG: &str = "pay_sig";

/// How a remote operation is authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    /// `?access_token=<token>` only.
    ///
    /// Used by read and administrative operations.
    Token,
    /// `?access_token=<token>&pay_sig=<hex>`.
    ///
    /// Used by operations whose result is later consumed by the client-side
    /// payment trigger, so the platform can cross-check the signed body.
    TokenAndSignature,
}

impl Authorization {
    /// Whether this mode needs an appKey.
    pub fn is_signed(self) -> bool {
        matches!(self, Authorization::TokenAndSignature)
    }
}

/// Build `path?access_token=<token>`.
pub fn with_token(path: &str, token: &str) -> String {
    let mut uri = String::with_capacity(path.len() + ACCESS_TOKEN.len() + token.len() + 2);
    uri.push_str(path);
    push_param(&mut uri, ACCESS_TOKEN, token);
    uri
}

/// Build `path?access_token=<token>&pay_sig=<pay_sig(path, body, app_key)>`.
///
/// `body` must be the exact bytes that will be transmitted.
pub fn with_token_and_signature(path: &str, token: &str, body: &[u8], app_key: &str) -> String {
    let mut uri = with_token(path, token);
    push_param(&mut uri, PAY_SIG, &pay_sig(path, body, app_key));
    uri
}

fn push_param(uri: &mut String, key: &str, value: &str) {
    uri.push(if uri.contains('?') { '&' } else { '?' });
    uri.push_str(key);
    uri.push('=');
    uri.push_str(value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_with_token() {
        assert_eq!(
            with_token("/wxa/business/getretailinfo", "TOKEN"),
            "/wxa/business/getretailinfo?access_token=TOKEN"
        );
    }

    #[test]
    fn test_with_token_and_signature() {
        let body = br#"{"mchid":"1230000109"}"#;
        let expected = format!(
            "/retail/B2b/getorder?access_token=TOKEN&pay_sig={}",
            pay_sig("/retail/B2b/getorder", body, "12345")
        );
        assert_eq!(
            with_token_and_signature("/retail/B2b/getorder", "TOKEN", body, "12345"),
            expected
        );
    }

    #[test]
    fn test_token_is_not_signed() {
        let body = br#"{"mchid":"1230000109"}"#;
        let a = with_token_and_signature("/retail/B2b/refund", "token-a", body, "k");
        let b = with_token_and_signature("/retail/B2b/refund", "token-b", body, "k");
        let sig = |s: &str| s.rsplit_once("pay_sig=").map(|(_, v)| v.to_string());
        assert_eq!(sig(&a), sig(&b));
    }

    #[test]
    fn test_existing_query_is_kept() {
        assert_eq!(
            with_token("/path?lang=zh_CN", "TOKEN"),
            "/path?lang=zh_CN&access_token=TOKEN"
        );
    }
}
