use async_trait::async_trait;
use b2bpay_core::uri::Authorization;
use b2bpay_core::{
    AccessToken, BaseResponse, Client, Context, HttpSend, Operation, Result,
};
use bytes::Bytes;
use serde::Serialize;

// A transport that answers every call locally and prints what would be sent.
#[derive(Debug)]
struct EchoHttpSend;

#[async_trait]
impl HttpSend for EchoHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        println!("{} {}", req.method(), req.uri());
        println!("body: {}", String::from_utf8_lossy(req.body()));

        Ok(http::Response::builder()
            .status(200)
            .body(Bytes::from_static(br#"{"errcode":0,"errmsg":"ok"}"#))?)
    }
}

#[derive(Serialize)]
struct GetOrder {
    mchid: String,
    out_trade_no: String,
}

impl Operation for GetOrder {
    const PATH: &'static str = "/retail/B2b/getorder";
    const AUTHORIZATION: Authorization = Authorization::TokenAndSignature;
    type Response = BaseResponse;
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let ctx = Context::new().with_http_send(EchoHttpSend);
    let client = Client::new(ctx, AccessToken::new("demo-access-token"));

    let req = GetOrder {
        mchid: "1230000109".to_string(),
        out_trade_no: "1217752501201407033233368018".to_string(),
    };
    let resp = client.invoke_signed(&req, "12345").await?;
    println!("errcode: {}, errmsg: {}", resp.errcode, resp.errmsg);

    Ok(())
}
