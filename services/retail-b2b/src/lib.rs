//! Retail B2B payment APIs for b2bpay.
//!
//! This crate provides the typed requests of the retail B2B payment platform.
//! Every request implements [`b2bpay_core::Operation`], so calling an API is
//! always `client.invoke(&req)` or `client.invoke_signed(&req, app_key)`.
//!
//! ## Overview
//!
//! | Module                 | Authorization          |
//! |------------------------|------------------------|
//! | [`merchant`]           | access token           |
//! | [`retail`]             | access token           |
//! | [`profit`]             | access token + pay_sig |
//! | [`order`], [`refund`]  | access token + pay_sig |
//!
//! [`payment`] builds the parameters handed to the client side payment UI and
//! [`notify`] decodes the XML pushed back by the platform.
//!
//! ## Quick Start
//!
//! ```no_run
//! use b2bpay_core::{Context, Result};
//! use b2bpay_retail_b2b::order::GetOrderRequest;
//! use b2bpay_retail_b2b::Config;
//!
//! # async fn example(ctx: Context) -> Result<()> {
//! let config = Config::default().from_env(&ctx)?;
//! let client = config.build_client(ctx)?;
//!
//! let req = GetOrderRequest {
//!     mchid: "1230000109".to_string(),
//!     out_trade_no: "1217752501201407033233368018".to_string(),
//!     ..Default::default()
//! };
//! let order = client
//!     .invoke_signed(&req, config.app_key(&req.mchid)?)
//!     .await?;
//! println!("pay status: {}", order.pay_status);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Variables
//!
//! ```bash
//! export B2BPAY_ACCESS_TOKEN=your-access-token
//! export B2BPAY_ENV=sandbox
//! export B2BPAY_SANDBOX_APP_KEY_1230000109=your-sandbox-app-key
//! ```

use b2bpay_core::{Error, Result};

pub mod constants;

mod config;
pub use config::{Config, PayEnv};

pub mod model;

pub mod merchant;
pub mod notify;
pub mod order;
pub mod payment;
pub mod profit;
pub mod refund;
pub mod retail;

pub(crate) fn require(value: &str, field: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::usage(format!("{field} is required")));
    }
    Ok(())
}

pub(crate) fn require_any(values: &[&str], fields: &str) -> Result<()> {
    if values.iter().all(|v| v.is_empty()) {
        return Err(Error::usage(format!("{fields} is required")));
    }
    Ok(())
}

pub(crate) fn require_limit(limit: i64, max: i64) -> Result<()> {
    if limit <= 0 || limit > max {
        return Err(Error::usage(format!("limit must be between 1 and {max}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use b2bpay_core::{Envelope, ErrorKind, Operation};
    use test_case::test_case;

    /// Decode a bare rejection into the response of `O`.
    fn bare_rejection<O: Operation>() -> (i64, String) {
        let resp: O::Response =
            serde_json::from_str(r#"{"errcode":1,"errmsg":"x"}"#).expect("envelope must decode");
        assert!(!resp.is_success());
        (resp.errcode(), resp.errmsg().to_string())
    }

    #[test_case(bare_rejection::<merchant::GetMerchantInfoRequest>; "get merchant info")]
    #[test_case(bare_rejection::<merchant::GetMerchantAppKeyRequest>; "get merchant app key")]
    #[test_case(bare_rejection::<retail::BatchCreateRetailRequest>; "batch create retail")]
    #[test_case(bare_rejection::<retail::GetRetailInfoRequest>; "get retail info")]
    #[test_case(bare_rejection::<retail::GetRetailOpenIdListRequest>; "get retail openid list")]
    #[test_case(bare_rejection::<profit::ProfitSharingRequest>; "profit sharing")]
    #[test_case(bare_rejection::<profit::QueryProfitSharingRequest>; "query profit sharing")]
    #[test_case(bare_rejection::<profit::ProfitSharingFinishRequest>; "profit sharing finish")]
    #[test_case(bare_rejection::<profit::ProfitSharingReturnRequest>; "profit sharing return")]
    #[test_case(bare_rejection::<profit::QueryProfitSharingReturnRequest>; "query profit sharing return")]
    #[test_case(bare_rejection::<profit::AddProfitSharingAccountRequest>; "add profit sharing account")]
    #[test_case(bare_rejection::<profit::DelProfitSharingAccountRequest>; "del profit sharing account")]
    #[test_case(bare_rejection::<profit::QueryProfitSharingAccountRequest>; "query profit sharing account")]
    #[test_case(bare_rejection::<profit::QueryProfitSharingRemainAmtRequest>; "query profit sharing remain amt")]
    #[test_case(bare_rejection::<order::GetOrderRequest>; "get order")]
    #[test_case(bare_rejection::<refund::RefundRequest>; "refund")]
    #[test_case(bare_rejection::<refund::GetRefundRequest>; "get refund")]
    fn test_every_response_decodes_bare_rejection(decode: fn() -> (i64, String)) {
        assert_eq!(decode(), (1, "x".to_string()));
    }

    #[test]
    fn test_require() {
        assert!(require("1230000109", "mchid").is_ok());

        let err = require("", "mchid").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Usage);
        assert_eq!(err.to_string(), "mchid is required");
    }

    #[test]
    fn test_require_any() {
        assert!(require_any(&["", "4200001"], "out_trade_no or order_id").is_ok());

        let err = require_any(&["", ""], "out_trade_no or order_id").unwrap_err();
        assert_eq!(err.to_string(), "out_trade_no or order_id is required");
    }
}
