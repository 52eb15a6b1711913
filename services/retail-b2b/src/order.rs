//! Order APIs.

use crate::constants::GET_ORDER;
use crate::{require, require_any};
use b2bpay_core::uri::Authorization;
use b2bpay_core::{impl_envelope, Operation, Result};
use serde::{Deserialize, Serialize};

/// Query an order by merchant order number or platform order id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetOrderRequest {
    pub mchid: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub out_trade_no: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub order_id: String,
}

/// Response of [`GetOrderRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetOrderResponse {
    #[serde(default)]
    pub appid: String,
    #[serde(default)]
    pub mchid: String,
    #[serde(default)]
    pub out_trade_no: String,
    #[serde(default)]
    pub order_id: String,
    /// Payment status, e.g. `ORDER_PAY_SUCC`.
    #[serde(default)]
    pub pay_status: String,
    #[serde(default)]
    pub pay_time: String,
    #[serde(default)]
    pub attach: String,
    #[serde(default)]
    pub refund_status: String,
    #[serde(default)]
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
}

impl Operation for GetOrderRequest {
    const PATH: &'static str = GET_ORDER;
    const AUTHORIZATION: Authorization = Authorization::TokenAndSignature;
    type Response = GetOrderResponse;

    fn validate(&self) -> Result<()> {
        require(&self.mchid, "mchid")?;
        require_any(
            &[self.out_trade_no.as_str(), self.order_id.as_str()],
            "out_trade_no or order_id",
        )
    }
}

impl_envelope!(GetOrderResponse);
