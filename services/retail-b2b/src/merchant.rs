//! Merchant information APIs.

use crate::constants::{GET_MERCHANT_APP_KEY, GET_MERCHANT_INFO};
use crate::require;
use b2bpay_core::uri::Authorization;
use b2bpay_core::{impl_envelope, Operation, Result};
use serde::{Deserialize, Serialize};

/// List every merchant bound to the mini program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetMerchantInfoRequest {}

/// Response of [`GetMerchantInfoRequest`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetMerchantInfoResponse {
    /// Merchant fields, kept as returned.
    #[serde(flatten)]
    pub info: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
}

impl Operation for GetMerchantInfoRequest {
    const PATH: &'static str = GET_MERCHANT_INFO;
    const AUTHORIZATION: Authorization = Authorization::Token;
    type Response = GetMerchantInfoResponse;
}

/// Query the appKey of a merchant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetMerchantAppKeyRequest {
    pub mchid: String,
}

/// Response of [`GetMerchantAppKeyRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetMerchantAppKeyResponse {
    #[serde(default)]
    pub app_key: String,
    #[serde(default)]
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
}

impl Operation for GetMerchantAppKeyRequest {
    const PATH: &'static str = GET_MERCHANT_APP_KEY;
    const AUTHORIZATION: Authorization = Authorization::Token;
    type Response = GetMerchantAppKeyResponse;

    fn validate(&self) -> Result<()> {
        require(&self.mchid, "mchid")
    }
}

impl_envelope!(GetMerchantInfoResponse, GetMerchantAppKeyResponse);
