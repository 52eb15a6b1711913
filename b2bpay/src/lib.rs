//! Authenticated client for the B2B retail payment API.
//!
//! `b2bpay` bundles [`b2bpay_core`], the retail B2B APIs and a default
//! context, so most users only depend on this crate.
//!
//! ```no_run
//! use b2bpay::retail::order::GetOrderRequest;
//! use b2bpay::retail::Config;
//! use b2bpay::{Context, DefaultContext, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx: Context = DefaultContext::new().into();
//!     let config = Config::default().from_env(&ctx)?;
//!     let client = config.build_client(ctx)?;
//!
//!     let req = GetOrderRequest {
//!         mchid: "1230000109".to_string(),
//!         out_trade_no: "1217752501201407033233368018".to_string(),
//!         ..Default::default()
//!     };
//!     let order = client
//!         .invoke_signed(&req, config.app_key(&req.mchid)?)
//!         .await?;
//!     println!("{order:?}");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `retail` (default): the retail B2B APIs under [`retail`].
//! - `default-context` (default): [`DefaultContext`], sending requests with
//!   reqwest and reading the process env.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use b2bpay_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::DefaultContext;

#[cfg(feature = "retail")]
pub mod retail {
    pub use b2bpay_retail_b2b::*;
}
