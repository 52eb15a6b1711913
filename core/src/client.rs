use crate::uri::{with_token, with_token_and_signature, Authorization};
use crate::utils::Redact;
use crate::{AccessToken, Context, Envelope, Error, Result};
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::Method;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Default endpoint of the remote platform.
pub const DEFAULT_BASE_URL: &str = "https://api.weixin.qq.com";

/// Operation describes one remote API call.
///
/// It is implemented on the request type: the path it is posted to, how it is
/// authorized, the response it decodes into and the validation of its
/// required fields. [`Client::invoke`] drives every operation through the
/// same pipeline.
pub trait Operation: Serialize + Send + Sync {
    /// API path, e.g. `/retail/B2b/getorder`.
    const PATH: &'static str;

    /// How the call is authorized.
    const AUTHORIZATION: Authorization;

    /// Typed response of this operation.
    type Response: DeserializeOwned + Envelope + Send + Sync + 'static;

    /// Check required fields.
    ///
    /// Return [`Error::usage`] naming the missing field.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Client is the long lived handle used to invoke remote operations.
///
/// It is cheap to clone and safe to share between tasks: the transport lives
/// behind an `Arc` in [`Context`] and the token in [`AccessToken`].
#[derive(Clone, Debug)]
pub struct Client {
    ctx: Context,
    base_url: String,
    token: AccessToken,
}

impl Client {
    /// Create a client talking to [`DEFAULT_BASE_URL`].
    pub fn new(ctx: Context, token: AccessToken) -> Self {
        Self {
            ctx,
            base_url: DEFAULT_BASE_URL.to_string(),
            token,
        }
    }

    /// Use another endpoint, for example a local gateway.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The endpoint requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The token holder, clone it to refresh the token from elsewhere.
    pub fn access_token(&self) -> &AccessToken {
        &self.token
    }

    /// The context used to send requests.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Invoke an operation authorized by the access token alone.
    ///
    /// Signed operations fail with a usage error, use [`Client::invoke_signed`].
    pub async fn invoke<O: Operation>(&self, req: &O) -> Result<O::Response> {
        self.execute(req, None).await
    }

    /// Invoke an operation, signing the body with `app_key` when the
    /// operation requires it.
    pub async fn invoke_signed<O: Operation>(&self, req: &O, app_key: &str) -> Result<O::Response> {
        self.execute(req, Some(app_key)).await
    }

    async fn execute<O: Operation>(&self, req: &O, app_key: Option<&str>) -> Result<O::Response> {
        req.validate()?;

        let token = self.token.get();
        if token.is_empty() {
            return Err(Error::usage("access token is empty"));
        }
        let app_key = match (O::AUTHORIZATION.is_signed(), app_key) {
            (true, Some(key)) if !key.is_empty() => Some(key),
            (true, _) => return Err(Error::usage("appKey is empty")),
            (false, _) => None,
        };

        let body = serde_json::to_vec(req)
            .map_err(|e| Error::serialization("failed to serialize request").with_source(e))?;

        let uri = match app_key {
            Some(key) => with_token_and_signature(O::PATH, &token, &body, key),
            None => with_token(O::PATH, &token),
        };
        debug!(
            "invoking {} with {:?}, access_token: {:?}",
            O::PATH,
            O::AUTHORIZATION,
            Redact::from(&token)
        );

        let req = http::Request::builder()
            .method(Method::POST)
            .uri(format!("{}{}", self.base_url, uri))
            .header(CONTENT_TYPE, "application/json")
            .body(Bytes::from(body))?;
        let (parts, body) = self.ctx.http_send(req).await?.into_parts();

        if !parts.status.is_success() {
            debug!("{} got http status {}", O::PATH, parts.status);
            return Err(Error::transport(format!(
                "api http status {}: {}",
                parts.status.as_u16(),
                String::from_utf8_lossy(&body)
            ))
            .with_status(parts.status)
            .with_body(body));
        }

        let out: O::Response = match serde_json::from_slice(&body) {
            Ok(out) => out,
            Err(e) => {
                return Err(Error::serialization("failed to deserialize response")
                    .with_body(body)
                    .with_source(e))
            }
        };

        if !out.is_success() {
            debug!(
                "{} got errcode {}: {}",
                O::PATH,
                out.errcode(),
                out.errmsg()
            );
            return Err(Error::application(out.errcode(), out.errmsg())
                .with_body(body)
                .with_payload(out));
        }

        debug!("{} succeeded", O::PATH);
        Ok(out)
    }
}
