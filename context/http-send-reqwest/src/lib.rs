// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Reqwest based transport for b2bpay.
//!
//! `ReqwestHttpSend` implements [`HttpSend`] on top of a shared
//! [`reqwest::Client`]. Build the client once and reuse it for every call:
//! timeouts, TLS and connection pooling are configured on the client.
//!
//! ## Example
//!
//! ```no_run
//! use b2bpay_core::{AccessToken, Client, Context};
//! use b2bpay_http_send_reqwest::ReqwestHttpSend;
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), reqwest::Error> {
//! let http = reqwest::Client::builder()
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//!
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::new(http));
//! let client = Client::new(ctx, AccessToken::new("access-token"));
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use b2bpay_core::{Error, HttpSend, Result};
use bytes::Bytes;
use http_body_util::BodyExt;
use log::debug;
use reqwest::{Client, Request};

/// Reqwest-based implementation of the `HttpSend` trait.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::usage("failed to convert request").with_source(e))?;

        let resp = self.client.execute(req).await.map_err(|e| {
            if e.is_timeout() {
                debug!("request timed out: {e}");
            }
            Error::transport("failed to send request").with_source(e)
        })?;
        let resp: http::Response<reqwest::Body> = resp.into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport("failed to read response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use b2bpay_core::ErrorKind;

    #[tokio::test]
    async fn test_relative_uri_is_usage_error() {
        let req = http::Request::post("/retail/B2b/getorder")
            .body(Bytes::new())
            .expect("request must build");
        let err = ReqwestHttpSend::default()
            .http_send(req)
            .await
            .expect_err("relative uri must be rejected");
        assert_eq!(err.kind(), ErrorKind::Usage);
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let _ = env_logger::builder().is_test(true).try_init();

        // Nothing listens on port 1.
        let req = http::Request::post("http://127.0.0.1:1/retail/B2b/getorder")
            .body(Bytes::from_static(b"{}"))
            .expect("request must build");
        let err = ReqwestHttpSend::default()
            .http_send(req)
            .await
            .expect_err("connection must fail");
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.status().is_none());
    }
}
