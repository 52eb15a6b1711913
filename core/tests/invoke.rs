use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use b2bpay_core::sign::pay_sig;
use b2bpay_core::uri::Authorization;
use b2bpay_core::{
    impl_envelope, AccessToken, Client, Context, Error, ErrorKind, HttpSend, Operation, Result,
};
use bytes::Bytes;
use http::StatusCode;
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};

/// Records every request and answers with a canned response.
#[derive(Debug, Clone)]
struct MockHttpSend {
    requests: Arc<Mutex<Vec<http::Request<Bytes>>>>,
    status: StatusCode,
    body: Bytes,
    fail: bool,
}

impl MockHttpSend {
    fn new(status: StatusCode, body: &'static str) -> Self {
        Self {
            requests: Arc::default(),
            status,
            body: Bytes::from_static(body.as_bytes()),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(StatusCode::OK, "")
        }
    }

    fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn last(&self) -> (String, String, Option<String>, Bytes) {
        let requests = self.requests.lock().unwrap();
        let req = requests.last().expect("a request must be sent");
        (
            req.method().to_string(),
            req.uri().to_string(),
            req.headers()
                .get(http::header::CONTENT_TYPE)
                .map(|v| v.to_str().unwrap().to_string()),
            req.body().clone(),
        )
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.requests.lock().unwrap().push(req);
        if self.fail {
            return Err(Error::transport("connection refused"));
        }
        Ok(http::Response::builder()
            .status(self.status)
            .body(self.body.clone())?)
    }
}

#[derive(Debug, Serialize)]
struct GetOrder {
    mchid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    out_trade_no: String,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
struct GetOrderResponse {
    #[serde(default)]
    order_id: String,
    #[serde(default)]
    errcode: i64,
    #[serde(default)]
    errmsg: String,
}

impl_envelope!(GetOrderResponse);

impl Operation for GetOrder {
    const PATH: &'static str = "/retail/B2b/getorder";
    const AUTHORIZATION: Authorization = Authorization::TokenAndSignature;
    type Response = GetOrderResponse;

    fn validate(&self) -> Result<()> {
        if self.mchid.is_empty() {
            return Err(Error::usage("mchid is required"));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct GetRetailInfo {
    openid: String,
}

impl Operation for GetRetailInfo {
    const PATH: &'static str = "/wxa/business/getretailinfo";
    const AUTHORIZATION: Authorization = Authorization::Token;
    type Response = GetOrderResponse;
}

fn get_order() -> GetOrder {
    GetOrder {
        mchid: "1230000109".to_string(),
        out_trade_no: "1217752501201407033233368018".to_string(),
    }
}

fn client(http: &MockHttpSend, token: &str) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();

    Client::new(
        Context::new().with_http_send(http.clone()),
        AccessToken::new(token),
    )
    .with_base_url("https://api.example.com/")
}

#[tokio::test]
async fn test_signed_call_sends_signed_exact_body() -> Result<()> {
    let http = MockHttpSend::new(
        StatusCode::OK,
        r#"{"errcode":0,"errmsg":"ok","order_id":"4200001"}"#,
    );
    let resp = client(&http, "TOKEN")
        .invoke_signed(&get_order(), "12345")
        .await?;
    assert_eq!(resp.order_id, "4200001");

    let (method, uri, content_type, body) = http.last();
    assert_eq!(method, "POST");
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(
        body,
        Bytes::from_static(
            br#"{"mchid":"1230000109","out_trade_no":"1217752501201407033233368018"}"#
        )
    );
    assert_eq!(
        uri,
        format!(
            "https://api.example.com/retail/B2b/getorder?access_token=TOKEN&pay_sig={}",
            pay_sig("/retail/B2b/getorder", &body, "12345")
        )
    );
    Ok(())
}

#[tokio::test]
async fn test_token_only_call_has_no_signature() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, r#"{"errcode":0,"errmsg":"ok"}"#);
    let req = GetRetailInfo {
        openid: "o6_bmjrPTlm6_2sgVt7hMZOPfL2M".to_string(),
    };
    client(&http, "TOKEN").invoke(&req).await?;

    let (_, uri, _, _) = http.last();
    assert_eq!(
        uri,
        "https://api.example.com/wxa/business/getretailinfo?access_token=TOKEN"
    );
    Ok(())
}

#[tokio::test]
async fn test_empty_app_key_is_usage_error_without_io() {
    let http = MockHttpSend::new(StatusCode::OK, r#"{"errcode":0}"#);
    let c = client(&http, "TOKEN");

    let err = c.invoke_signed(&get_order(), "").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);

    let err = c.invoke(&get_order()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);

    assert_eq!(http.calls(), 0);
}

#[tokio::test]
async fn test_empty_token_is_usage_error_without_io() {
    let http = MockHttpSend::new(StatusCode::OK, r#"{"errcode":0}"#);
    let err = client(&http, "")
        .invoke_signed(&get_order(), "12345")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);
    assert_eq!(err.to_string(), "access token is empty");
    assert_eq!(http.calls(), 0);
}

#[tokio::test]
async fn test_validation_failure_is_usage_error_without_io() {
    let http = MockHttpSend::new(StatusCode::OK, r#"{"errcode":0}"#);
    let req = GetOrder {
        mchid: String::new(),
        out_trade_no: String::new(),
    };
    let err = client(&http, "TOKEN")
        .invoke_signed(&req, "12345")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);
    assert_eq!(err.to_string(), "mchid is required");
    assert_eq!(http.calls(), 0);
}

#[tokio::test]
async fn test_http_500_is_transport_error_with_body() {
    let http = MockHttpSend::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"errcode":-1,"errmsg":"system error"}"#,
    );
    let err = client(&http, "TOKEN")
        .invoke_signed(&get_order(), "12345")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(
        err.body(),
        Some(&br#"{"errcode":-1,"errmsg":"system error"}"#[..])
    );
    assert_eq!(err.errcode(), None);
    assert_eq!(http.calls(), 1);
}

#[tokio::test]
async fn test_transport_failure_is_surfaced() {
    let http = MockHttpSend::failing();
    let err = client(&http, "TOKEN")
        .invoke_signed(&get_order(), "12345")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_application_error_keeps_partial_payload() {
    let http = MockHttpSend::new(
        StatusCode::OK,
        r#"{"errcode":1,"errmsg":"biz rejected","order_id":"X"}"#,
    );
    let err = client(&http, "TOKEN")
        .invoke_signed(&get_order(), "12345")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Application);
    assert_eq!(err.errcode(), Some(1));
    assert_eq!(err.errmsg(), Some("biz rejected"));
    let payload = err
        .into_payload::<GetOrderResponse>()
        .expect("payload must be kept");
    assert_eq!(payload.order_id, "X");
}

#[tokio::test]
async fn test_undecodable_response_is_serialization_error() {
    let http = MockHttpSend::new(StatusCode::OK, "<html>gateway</html>");
    let err = client(&http, "TOKEN")
        .invoke_signed(&get_order(), "12345")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Serialization);
    assert!(err.is_serialization());
    assert_eq!(err.body(), Some(&b"<html>gateway</html>"[..]));
}

#[tokio::test]
async fn test_refreshed_token_is_used_by_next_call() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, r#"{"errcode":0,"errmsg":"ok"}"#);
    let c = client(&http, "OLD");
    let refresher = c.access_token().clone();

    c.invoke_signed(&get_order(), "12345").await?;
    assert!(http.last().1.contains("access_token=OLD&"));

    refresher.set("NEW");
    c.invoke_signed(&get_order(), "12345").await?;
    assert!(http.last().1.contains("access_token=NEW&"));
    Ok(())
}
