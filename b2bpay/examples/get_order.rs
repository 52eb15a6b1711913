use b2bpay::retail::model::Amount;
use b2bpay::retail::order::GetOrderRequest;
use b2bpay::retail::payment::{
    build_common_payment_params, CommonPaymentSignData, MODE_RETAIL_PAY_GOODS,
};
use b2bpay::retail::Config;
use b2bpay::{Context, DefaultContext, Result};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let ctx: Context = DefaultContext::new().into();
    let config = Config::default().from_env(&ctx)?;
    let client = config.build_client(ctx)?;

    let mchid = "1230000109";
    let out_trade_no = "1217752501201407033233368018";
    let app_key = config.app_key(mchid)?;

    // Parameters for the mini program to start paying.
    let sign_data = CommonPaymentSignData {
        mchid: mchid.to_string(),
        out_trade_no: out_trade_no.to_string(),
        description: "store order".to_string(),
        amount: Amount {
            order_amount: 1,
            currency: Some("CNY".to_string()),
        },
        ..Default::default()
    }
    .with_env(config.pay_env());
    let params = build_common_payment_params(
        "requestCommonPayment",
        &sign_data,
        app_key,
        "session-key-from-login",
        MODE_RETAIL_PAY_GOODS,
    )?;
    println!("payment params: {params:?}");

    // Later, check the order.
    let req = GetOrderRequest {
        mchid: mchid.to_string(),
        out_trade_no: out_trade_no.to_string(),
        ..Default::default()
    };
    match client.invoke_signed(&req, app_key).await {
        Ok(order) => println!("pay status: {}", order.pay_status),
        Err(err) if err.is_application() => {
            println!("rejected with errcode {:?}: {:?}", err.errcode(), err.errmsg())
        }
        Err(err) => return Err(err),
    }
    Ok(())
}
