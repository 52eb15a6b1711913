//! Profit sharing APIs.
//!
//! All of them are signed with the merchant's appKey.

use crate::constants::*;
use crate::model::ProfitReceiver;
use crate::{require, require_any, require_limit};
use b2bpay_core::uri::Authorization;
use b2bpay_core::{impl_envelope, Error, Operation, Result};
use serde::{Deserialize, Serialize};

/// Split the funds of a paid order between receivers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitSharingRequest {
    pub mchid: String,
    pub transaction_id: String,
    pub out_order_no: String,
    /// Unfreeze the amount left after this split.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub unfreeze_unpaid: bool,
    pub receivers: Vec<ProfitReceiver>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Response of [`ProfitSharingRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitSharingResponse {
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub out_order_no: String,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
}

impl Operation for ProfitSharingRequest {
    const PATH: &'static str = PROFIT_SHARING;
    const AUTHORIZATION: Authorization = Authorization::TokenAndSignature;
    type Response = ProfitSharingResponse;

    fn validate(&self) -> Result<()> {
        require(&self.mchid, "mchid")?;
        require(&self.transaction_id, "transaction_id")?;
        require(&self.out_order_no, "out_order_no")?;
        if self.receivers.is_empty() {
            return Err(Error::usage("receivers is required"));
        }
        Ok(())
    }
}

/// Query a profit sharing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryProfitSharingRequest {
    pub mchid: String,
    pub transaction_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub out_order_no: String,
}

/// Response of [`QueryProfitSharingRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryProfitSharingResponse {
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub out_order_no: String,
    #[serde(default)]
    pub transaction_id: String,
    /// Profit sharing status, e.g. `PROCESSING` or `FINISHED`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub receivers: Vec<ProfitReceiver>,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
}

impl Operation for QueryProfitSharingRequest {
    const PATH: &'static str = QUERY_PROFIT_SHARING;
    const AUTHORIZATION: Authorization = Authorization::TokenAndSignature;
    type Response = QueryProfitSharingResponse;

    fn validate(&self) -> Result<()> {
        require(&self.mchid, "mchid")?;
        require(&self.transaction_id, "transaction_id")
    }
}

/// Finish profit sharing and unfreeze the remaining amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitSharingFinishRequest {
    pub mchid: String,
    pub transaction_id: String,
    pub out_order_no: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Response of [`ProfitSharingFinishRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitSharingFinishResponse {
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub out_order_no: String,
    #[serde(default)]
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
}

impl Operation for ProfitSharingFinishRequest {
    const PATH: &'static str = PROFIT_SHARING_FINISH;
    const AUTHORIZATION: Authorization = Authorization::TokenAndSignature;
    type Response = ProfitSharingFinishResponse;

    fn validate(&self) -> Result<()> {
        require(&self.mchid, "mchid")?;
        require(&self.transaction_id, "transaction_id")?;
        require(&self.out_order_no, "out_order_no")
    }
}

/// Return funds already shared to a receiver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitSharingReturnRequest {
    pub mchid: String,
    pub transaction_id: String,
    pub out_order_no: String,
    pub out_return_no: String,
    pub return_amount: i64,
    pub receiver: ProfitReceiver,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Response of [`ProfitSharingReturnRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitSharingReturnResponse {
    #[serde(default)]
    pub return_id: String,
    #[serde(default)]
    pub out_return_no: String,
    #[serde(default)]
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
}

impl Operation for ProfitSharingReturnRequest {
    const PATH: &'static str = PROFIT_SHARING_RETURN;
    const AUTHORIZATION: Authorization = Authorization::TokenAndSignature;
    type Response = ProfitSharingReturnResponse;

    fn validate(&self) -> Result<()> {
        require(&self.mchid, "mchid")?;
        require(&self.transaction_id, "transaction_id")?;
        require(&self.out_order_no, "out_order_no")?;
        require(&self.out_return_no, "out_return_no")?;
        if self.return_amount <= 0 {
            return Err(Error::usage("return_amount is required"));
        }
        Ok(())
    }
}

/// Query a profit sharing return.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryProfitSharingReturnRequest {
    pub mchid: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub out_return_no: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub return_id: String,
}

/// Response of [`QueryProfitSharingReturnRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryProfitSharingReturnResponse {
    #[serde(default)]
    pub return_id: String,
    #[serde(default)]
    pub out_return_no: String,
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub amount: i64,
    /// Return status, e.g. `PROCESSING`, `SUCCESS` or `FAILED`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
}

impl Operation for QueryProfitSharingReturnRequest {
    const PATH: &'static str = QUERY_PROFIT_SHARING_RETURN;
    const AUTHORIZATION: Authorization = Authorization::TokenAndSignature;
    type Response = QueryProfitSharingReturnResponse;

    fn validate(&self) -> Result<()> {
        require(&self.mchid, "mchid")?;
        require_any(
            &[self.out_return_no.as_str(), self.return_id.as_str()],
            "out_return_no or return_id",
        )
    }
}

/// Register a profit sharing receiver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddProfitSharingAccountRequest {
    pub mchid: String,
    pub profit_sharing_relation_type: String,
    pub payee_type: String,
    pub payee_id: String,
    pub payee_name: String,
}

impl Operation for AddProfitSharingAccountRequest {
    const PATH: &'static str = ADD_PROFIT_SHARING_ACCOUNT;
    const AUTHORIZATION: Authorization = Authorization::TokenAndSignature;
    type Response = b2bpay_core::BaseResponse;

    fn validate(&self) -> Result<()> {
        require(&self.mchid, "mchid")?;
        require(
            &self.profit_sharing_relation_type,
            "profit_sharing_relation_type",
        )?;
        require(&self.payee_type, "payee_type")?;
        require(&self.payee_id, "payee_id")?;
        require(&self.payee_name, "payee_name")
    }
}

/// Remove a profit sharing receiver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelProfitSharingAccountRequest {
    pub mchid: String,
    pub payee_type: String,
    pub payee_id: String,
}

impl Operation for DelProfitSharingAccountRequest {
    const PATH: &'static str = DEL_PROFIT_SHARING_ACCOUNT;
    const AUTHORIZATION: Authorization = Authorization::TokenAndSignature;
    type Response = b2bpay_core::BaseResponse;

    fn validate(&self) -> Result<()> {
        require(&self.mchid, "mchid")?;
        require(&self.payee_type, "payee_type")?;
        require(&self.payee_id, "payee_id")
    }
}

/// List the registered receivers of a merchant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryProfitSharingAccountRequest {
    pub mchid: String,
    pub offset: i64,
    /// Page size, at most 100.
    pub limit: i64,
}

/// A registered profit sharing receiver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfitSharingAccount {
    pub payee_type: String,
    pub payee_id: String,
    pub payee_name: String,
    pub profit_sharing_relation_type: String,
}

/// Response of [`QueryProfitSharingAccountRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryProfitSharingAccountResponse {
    #[serde(default)]
    pub account_list: Vec<ProfitSharingAccount>,
    #[serde(default)]
    pub total_count: i64,
    #[serde(default)]
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
}

impl Operation for QueryProfitSharingAccountRequest {
    const PATH: &'static str = QUERY_PROFIT_SHARING_ACCOUNT;
    const AUTHORIZATION: Authorization = Authorization::TokenAndSignature;
    type Response = QueryProfitSharingAccountResponse;

    fn validate(&self) -> Result<()> {
        require(&self.mchid, "mchid")?;
        if self.offset < 0 {
            return Err(Error::usage("offset must be >= 0"));
        }
        require_limit(self.limit, MAX_PAGE_LIMIT)
    }
}

/// Query how much of an order can still be shared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryProfitSharingRemainAmtRequest {
    pub mchid: String,
    pub out_trade_no: String,
}

/// Response of [`QueryProfitSharingRemainAmtRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryProfitSharingRemainAmtResponse {
    #[serde(default)]
    pub remain_amount: i64,
    #[serde(default)]
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
}

impl Operation for QueryProfitSharingRemainAmtRequest {
    const PATH: &'static str = QUERY_PROFIT_SHARING_REMAIN_AMT;
    const AUTHORIZATION: Authorization = Authorization::TokenAndSignature;
    type Response = QueryProfitSharingRemainAmtResponse;

    fn validate(&self) -> Result<()> {
        require(&self.mchid, "mchid")?;
        require(&self.out_trade_no, "out_trade_no")
    }
}

impl_envelope!(
    ProfitSharingResponse,
    QueryProfitSharingResponse,
    ProfitSharingFinishResponse,
    ProfitSharingReturnResponse,
    QueryProfitSharingReturnResponse,
    QueryProfitSharingAccountResponse,
    QueryProfitSharingRemainAmtResponse
);
