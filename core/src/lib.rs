//! Core components of the authenticated request pipeline.
//!
//! This crate provides the pieces every B2B retail API call goes through.
//!
//! ## Overview
//!
//! - [`AccessToken`]: the shared, externally refreshed access credential
//! - [`sign`]: `pay_sig` and the user signature, both hex HMAC-SHA256
//! - [`uri`]: authorized URI construction (`access_token`, `pay_sig`)
//! - [`Client`] and [`Operation`]: the invoke-and-classify pipeline
//! - [`Envelope`]: the `errcode`/`errmsg` shape shared by all responses
//! - [`Context`]: the transport ([`HttpSend`]) and environment ([`Env`])
//!
//! ## Example
//!
//! ```no_run
//! use b2bpay_core::uri::Authorization;
//! use b2bpay_core::{AccessToken, BaseResponse, Client, Context, Operation, Result};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct CloseThing {
//!     mchid: String,
//! }
//!
//! impl Operation for CloseThing {
//!     const PATH: &'static str = "/retail/B2b/closething";
//!     const AUTHORIZATION: Authorization = Authorization::TokenAndSignature;
//!     type Response = BaseResponse;
//! }
//!
//! # async fn example(ctx: Context) -> Result<()> {
//! let token = AccessToken::new("access-token");
//! let client = Client::new(ctx, token.clone());
//!
//! // Refresh logic lives elsewhere and only ever calls `set`.
//! token.set("refreshed-access-token");
//!
//! let req = CloseThing {
//!     mchid: "1230000109".to_string(),
//! };
//! match client.invoke_signed(&req, "app-key").await {
//!     Ok(_) => {}
//!     Err(err) if err.is_application() => {
//!         let partial = err.payload::<BaseResponse>();
//!         println!("rejected: {:?} {:?}", err.errcode(), partial);
//!     }
//!     Err(err) => return Err(err),
//! }
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod sign;
pub mod uri;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};
mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};
mod token;
pub use token::AccessToken;
mod envelope;
pub use envelope::{BaseResponse, Envelope};
mod client;
pub use client::{Client, Operation, DEFAULT_BASE_URL};
