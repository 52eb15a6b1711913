use async_trait::async_trait;
use b2bpay_core::{Context, Env, HttpSend, OsEnv, Result};
use b2bpay_http_send_reqwest::ReqwestHttpSend;
use bytes::Bytes;
use reqwest::Client;
use std::collections::HashMap;

/// DefaultContext sends requests with reqwest and reads the process env.
#[derive(Debug, Default, Clone)]
pub struct DefaultContext {
    http: ReqwestHttpSend,
}

impl DefaultContext {
    /// Create a context with a default reqwest client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a preconfigured reqwest client, e.g. one with
    /// timeouts or a proxy.
    pub fn with_client(client: Client) -> Self {
        Self {
            http: ReqwestHttpSend::new(client),
        }
    }
}

#[async_trait]
impl HttpSend for DefaultContext {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.http.http_send(req).await
    }
}

impl Env for DefaultContext {
    fn var(&self, key: &str) -> Option<String> {
        OsEnv.var(key)
    }

    fn vars(&self) -> HashMap<String, String> {
        OsEnv.vars()
    }
}

impl From<DefaultContext> for Context {
    fn from(value: DefaultContext) -> Self {
        Context::new()
            .with_http_send(value.clone())
            .with_env(value)
    }
}
