//! Parameters of the client side payment UI.
//!
//! The payment UI receives `signData` verbatim, so both signatures are
//! computed over the exact string returned in [`CommonPaymentParams::sign_data`].

use crate::model::{Amount, CombinedOrder, ProductInfo};
use crate::PayEnv;
use b2bpay_core::sign::{pay_sig, user_signature};
use b2bpay_core::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Payment mode of retail goods orders.
pub const MODE_RETAIL_PAY_GOODS: &str = "retail_pay_goods";

/// Sign data of a single order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommonPaymentSignData {
    pub mchid: String,
    pub out_trade_no: String,
    pub description: String,
    pub amount: Amount,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub attach: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_info: Option<ProductInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<u32>,
    /// `0` for production, `1` for sandbox, see [`PayEnv::sign_data_env`].
    pub env: u32,
}

/// Sign data of a combined order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedPaymentSignData {
    pub env: u32,
    pub combined_order_list: Vec<CombinedOrder>,
}

impl CommonPaymentSignData {
    /// Set `env` from the payment environment.
    pub fn with_env(mut self, env: PayEnv) -> Self {
        self.env = env.sign_data_env();
        self
    }
}

impl CombinedPaymentSignData {
    /// Set `env` from the payment environment.
    pub fn with_env(mut self, env: PayEnv) -> Self {
        self.env = env.sign_data_env();
        self
    }
}

/// Parameters handed to the client side payment UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonPaymentParams {
    /// Serialized sign data, exactly the signed bytes.
    #[serde(rename = "signData")]
    pub sign_data: String,
    pub mode: String,
    /// `pay_sig` over `uri` and `sign_data`.
    #[serde(rename = "paySig")]
    pub pay_sig: String,
    /// User signature over `sign_data` with the session key.
    pub signature: String,
}

/// Build the payment UI parameters for `sign_data`.
///
/// `uri` must be the path the payment UI signs against. The session key is
/// passed through as-is; an empty one still yields a signature.
pub fn build_common_payment_params<T: Serialize>(
    uri: &str,
    sign_data: &T,
    app_key: &str,
    session_key: &str,
    mode: &str,
) -> Result<CommonPaymentParams> {
    if app_key.is_empty() {
        return Err(Error::usage("appKey is required"));
    }

    let body = serde_json::to_string(sign_data)
        .map_err(|e| Error::serialization("failed to serialize sign data").with_source(e))?;
    debug!("building payment params for {uri} in mode {mode}");

    Ok(CommonPaymentParams {
        pay_sig: pay_sig(uri, body.as_bytes(), app_key),
        signature: user_signature(body.as_bytes(), session_key),
        sign_data: body,
        mode: mode.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use b2bpay_core::ErrorKind;
    use pretty_assertions::assert_eq;

    const URI: &str = "requestCommonPayment";

    fn sign_data() -> CommonPaymentSignData {
        CommonPaymentSignData {
            mchid: "1230000109".to_string(),
            out_trade_no: "1217752501201407033233368018".to_string(),
            description: "store order".to_string(),
            amount: Amount {
                order_amount: 1,
                currency: Some("CNY".to_string()),
            },
            ..Default::default()
        }
        .with_env(PayEnv::Sandbox)
    }

    #[test]
    fn test_signatures_cover_exact_sign_data() -> Result<()> {
        let params = build_common_payment_params(
            URI,
            &sign_data(),
            "app-key",
            "session-key",
            MODE_RETAIL_PAY_GOODS,
        )?;

        assert_eq!(
            params.sign_data,
            r#"{"mchid":"1230000109","out_trade_no":"1217752501201407033233368018","description":"store order","amount":{"order_amount":1,"currency":"CNY"},"env":1}"#
        );
        assert_eq!(params.mode, "retail_pay_goods");
        assert_eq!(
            params.pay_sig,
            pay_sig(URI, params.sign_data.as_bytes(), "app-key")
        );
        assert_eq!(
            params.signature,
            user_signature(params.sign_data.as_bytes(), "session-key")
        );
        Ok(())
    }

    #[test]
    fn test_empty_app_key() {
        let err =
            build_common_payment_params(URI, &sign_data(), "", "session-key", MODE_RETAIL_PAY_GOODS)
                .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Usage);
    }

    #[test]
    fn test_params_use_client_field_names() -> Result<()> {
        let data = CombinedPaymentSignData {
            env: 0,
            combined_order_list: vec![],
        };
        let params = build_common_payment_params(URI, &data, "k", "", MODE_RETAIL_PAY_GOODS)?;
        let value = serde_json::to_value(&params).unwrap();

        assert_eq!(value["signData"], r#"{"env":0,"combined_order_list":[]}"#);
        assert!(value.get("paySig").is_some());
        assert!(value.get("signature").is_some());
        Ok(())
    }
}
