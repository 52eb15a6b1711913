//! Refund APIs.

use crate::constants::{GET_REFUND, REFUND};
use crate::{require, require_any};
use b2bpay_core::uri::Authorization;
use b2bpay_core::{impl_envelope, Error, Operation, Result};
use serde::{Deserialize, Serialize};

/// Refund part or all of a paid order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundRequest {
    pub mchid: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub out_trade_no: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub order_id: String,
    pub out_refund_no: String,
    pub refund_amount: i64,
    /// Source of the refunded funds.
    pub refund_from: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_reason: Option<i32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Response of [`RefundRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundResponse {
    #[serde(default)]
    pub refund_id: String,
    #[serde(default)]
    pub out_refund_no: String,
    #[serde(default)]
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
}

impl Operation for RefundRequest {
    const PATH: &'static str = REFUND;
    const AUTHORIZATION: Authorization = Authorization::TokenAndSignature;
    type Response = RefundResponse;

    fn validate(&self) -> Result<()> {
        require(&self.mchid, "mchid")?;
        require_any(
            &[self.out_trade_no.as_str(), self.order_id.as_str()],
            "out_trade_no or order_id",
        )?;
        require(&self.out_refund_no, "out_refund_no")?;
        if self.refund_amount <= 0 {
            return Err(Error::usage("refund_amount must be positive"));
        }
        Ok(())
    }
}

/// Query a refund.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRefundRequest {
    pub mchid: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub out_refund_no: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub refund_id: String,
}

/// Response of [`GetRefundRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRefundResponse {
    #[serde(default)]
    pub refund_id: String,
    #[serde(default)]
    pub out_refund_no: String,
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub out_trade_no: String,
    /// Refund status, e.g. `REFUND_SUCC`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
}

impl Operation for GetRefundRequest {
    const PATH: &'static str = GET_REFUND;
    const AUTHORIZATION: Authorization = Authorization::TokenAndSignature;
    type Response = GetRefundResponse;

    fn validate(&self) -> Result<()> {
        require(&self.mchid, "mchid")?;
        require_any(
            &[self.out_refund_no.as_str(), self.refund_id.as_str()],
            "out_refund_no or refund_id",
        )
    }
}

impl_envelope!(RefundResponse, GetRefundResponse);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn refund() -> RefundRequest {
        RefundRequest {
            mchid: "1230000109".to_string(),
            order_id: "4200001".to_string(),
            out_refund_no: "R1217752501".to_string(),
            refund_amount: 100,
            refund_from: 1,
            ..Default::default()
        }
    }

    #[test_case(|r: &mut RefundRequest| r.mchid.clear(), "mchid is required"; "mchid")]
    #[test_case(|r: &mut RefundRequest| r.order_id.clear(), "out_trade_no or order_id is required"; "order")]
    #[test_case(|r: &mut RefundRequest| r.out_refund_no.clear(), "out_refund_no is required"; "out refund no")]
    #[test_case(|r: &mut RefundRequest| r.refund_amount = 0, "refund_amount must be positive"; "amount")]
    fn test_refund_required_fields(f: fn(&mut RefundRequest), expected: &str) {
        let mut req = refund();
        assert!(req.validate().is_ok());

        f(&mut req);
        assert_eq!(req.validate().unwrap_err().to_string(), expected);
    }

    #[test]
    fn test_refund_body_skips_empty_fields() {
        assert_eq!(
            serde_json::to_string(&refund()).unwrap(),
            r#"{"mchid":"1230000109","order_id":"4200001","out_refund_no":"R1217752501","refund_amount":100,"refund_from":1}"#
        );
    }

    #[test]
    fn test_get_refund_needs_an_id() {
        let mut req = GetRefundRequest {
            mchid: "1230000109".to_string(),
            ..Default::default()
        };
        assert!(req.validate().is_err());

        req.out_refund_no = "R1217752501".to_string();
        assert!(req.validate().is_ok());
    }
}
