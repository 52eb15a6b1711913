use b2bpay_core::{AccessToken, BaseResponse, Client, Context, Result};
use b2bpay_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client as HttpClient;
use std::time::Duration;

// Any request type works with a custom client; this one posts `{}` to the
// merchant info endpoint.
#[derive(serde::Serialize)]
struct GetMerchantInfo {}

impl b2bpay_core::Operation for GetMerchantInfo {
    const PATH: &'static str = "/retail/B2b/getmchinfo";
    const AUTHORIZATION: b2bpay_core::uri::Authorization = b2bpay_core::uri::Authorization::Token;
    type Response = BaseResponse;
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::try_init();

    // Create a custom reqwest client with specific configuration
    let http = HttpClient::builder()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .user_agent("b2bpay-example/0.1")
        .build()
        .map_err(|e| b2bpay_core::Error::config_invalid("failed to build http client").with_source(e))?;

    let token = std::env::var("B2BPAY_ACCESS_TOKEN").unwrap_or_default();
    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(http));
    let client = Client::new(ctx, AccessToken::new(token));

    match client.invoke(&GetMerchantInfo {}).await {
        Ok(resp) => println!("errcode: {}, errmsg: {}", resp.errcode, resp.errmsg),
        Err(err) => println!("call failed ({}): {err}", err.kind()),
    }

    Ok(())
}
