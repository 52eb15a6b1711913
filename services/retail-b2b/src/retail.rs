//! Store assistant APIs.

use crate::constants::{
    BATCH_CREATE_RETAIL, GET_RETAIL_INFO, GET_RETAIL_OPENID_LIST, MAX_PAGE_LIMIT,
};
use crate::{require_any, require_limit};
use b2bpay_core::uri::Authorization;
use b2bpay_core::{impl_envelope, Error, Operation, Result};
use serde::{Deserialize, Serialize};

/// Store information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetailInfo {
    pub mobile_phone: String,
    pub retail_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub retail_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sub_retail_type: String,
    pub address_province: String,
    pub address_city: String,
    pub address_region: String,
    pub address_street: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub registration_number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub biz_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub corporation_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub business_type: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub other_business_type: String,
}

/// Pre-register stores in batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchCreateRetailRequest {
    pub retail_info_list: Vec<RetailInfo>,
}

/// A store that could not be registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchCreateRetailFailRecord {
    pub mobile_phone: String,
    pub registration_number: String,
    pub failure_code: i64,
}

/// Response of [`BatchCreateRetailRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchCreateRetailResponse {
    #[serde(default)]
    pub num_success: i64,
    #[serde(default)]
    pub num_failure: i64,
    #[serde(default)]
    pub failure_record_list: Vec<BatchCreateRetailFailRecord>,
    #[serde(default)]
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
}

impl Operation for BatchCreateRetailRequest {
    const PATH: &'static str = BATCH_CREATE_RETAIL;
    const AUTHORIZATION: Authorization = Authorization::Token;
    type Response = BatchCreateRetailResponse;

    fn validate(&self) -> Result<()> {
        if self.retail_info_list.is_empty() {
            return Err(Error::usage("retail_info_list is required"));
        }
        Ok(())
    }
}

/// Query a store by openid or mobile phone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRetailInfoRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub openid: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mobile_phone: String,
}

/// Response of [`GetRetailInfoRequest`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRetailInfoResponse {
    #[serde(default)]
    pub openid: String,
    #[serde(flatten)]
    pub info: RetailInfo,
    #[serde(default)]
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
}

impl Operation for GetRetailInfoRequest {
    const PATH: &'static str = GET_RETAIL_INFO;
    const AUTHORIZATION: Authorization = Authorization::Token;
    type Response = GetRetailInfoResponse;

    fn validate(&self) -> Result<()> {
        require_any(&[self.openid.as_str(), self.mobile_phone.as_str()], "openid or mobile_phone")
    }
}

/// List the openids of every authorized store, page by page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRetailOpenIdListRequest {
    /// Page size, at most 100.
    pub limit: i64,
    /// Cursor returned by the previous page, empty for the first one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub page_context: String,
}

/// Response of [`GetRetailOpenIdListRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRetailOpenIdListResponse {
    #[serde(default)]
    pub openid_list: Vec<String>,
    #[serde(default)]
    pub page_context: String,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
}

impl Operation for GetRetailOpenIdListRequest {
    const PATH: &'static str = GET_RETAIL_OPENID_LIST;
    const AUTHORIZATION: Authorization = Authorization::Token;
    type Response = GetRetailOpenIdListResponse;

    fn validate(&self) -> Result<()> {
        require_limit(self.limit, MAX_PAGE_LIMIT)
    }
}

impl_envelope!(
    BatchCreateRetailResponse,
    GetRetailInfoResponse,
    GetRetailOpenIdListResponse
);
