// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

// Env values used by the retail B2B service.
pub const B2BPAY_APP_ID: &str = "B2BPAY_APP_ID";
pub const B2BPAY_APP_SECRET: &str = "B2BPAY_APP_SECRET";
pub const B2BPAY_ACCESS_TOKEN: &str = "B2BPAY_ACCESS_TOKEN";
pub const B2BPAY_BASE_URL: &str = "B2BPAY_BASE_URL";
pub const B2BPAY_ENV: &str = "B2BPAY_ENV";
/// Prefix of `B2BPAY_APP_KEY_<MCHID>` entries.
pub const B2BPAY_APP_KEY_PREFIX: &str = "B2BPAY_APP_KEY_";
/// Prefix of `B2BPAY_SANDBOX_APP_KEY_<MCHID>` entries.
pub const B2BPAY_SANDBOX_APP_KEY_PREFIX: &str = "B2BPAY_SANDBOX_APP_KEY_";

// Merchant APIs.
pub const GET_MERCHANT_INFO: &str = "/retail/B2b/getmchinfo";
pub const GET_MERCHANT_APP_KEY: &str = "/retail/B2b/getappkey";

// Store assistant APIs.
pub const BATCH_CREATE_RETAIL: &str = "/wxa/business/batchcreateretail";
pub const GET_RETAIL_INFO: &str = "/wxa/business/getretailinfo";
pub const GET_RETAIL_OPENID_LIST: &str = "/wxa/business/getretailopenidlist";

// Profit sharing APIs.
pub const PROFIT_SHARING: &str = "/retail/B2b/profitsharing";
pub const QUERY_PROFIT_SHARING: &str = "/retail/B2b/queryprofitsharing";
pub const PROFIT_SHARING_FINISH: &str = "/retail/B2b/profitsharingfinish";
pub const PROFIT_SHARING_RETURN: &str = "/retail/B2b/profitsharingreturn";
pub const QUERY_PROFIT_SHARING_RETURN: &str = "/retail/B2b/queryprofitsharingreturn";
pub const ADD_PROFIT_SHARING_ACCOUNT: &str = "/retail/B2b/addprofitsharingaccount";
pub const DEL_PROFIT_SHARING_ACCOUNT: &str = "/retail/B2b/delprofitsharingaccount";
pub const QUERY_PROFIT_SHARING_ACCOUNT: &str = "/retail/B2b/queryprofitsharingaccount";
pub const QUERY_PROFIT_SHARING_REMAIN_AMT: &str = "/retail/B2b/queryprofitsharingremainamt";

// Order and refund APIs.
pub const GET_ORDER: &str = "/retail/B2b/getorder";
pub const REFUND: &str = "/retail/B2b/refund";
pub const GET_REFUND: &str = "/retail/B2b/getrefund";

/// Page size limit shared by the paginated list APIs.
pub const MAX_PAGE_LIMIT: i64 = 100;
