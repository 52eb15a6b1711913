//! Shapes shared by several APIs.

use serde::{Deserialize, Serialize};

/// Order amount, in the smallest currency unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Amount to pay.
    pub order_amount: i64,
    /// Currency, `CNY` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Product summary forwarded to the payment UI as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    /// Free form product summary.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub summary_info: serde_json::Value,
}

/// One sub-order of a combined payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedOrder {
    /// Merchant id of the sub-order.
    pub mchid: String,
    /// Merchant order number.
    pub out_trade_no: String,
    /// Order description.
    pub description: String,
    /// Amount of the sub-order.
    pub amount: Amount,
    /// Data echoed back by queries and notifications.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub attach: String,
}

/// A profit sharing receiver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfitReceiver {
    /// Receiver type, e.g. `MERCHANT_ID`.
    #[serde(rename = "type")]
    pub receiver_type: String,
    /// Receiver account.
    pub account: String,
    /// Amount shared to this receiver.
    pub amount: i64,
    /// Reason shown to the receiver.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Processing result, only present in query responses.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub result: String,
}
