use crate::constants::*;
use b2bpay_core::utils::Redact;
use b2bpay_core::{AccessToken, Client, Context, Error, Result};
use log::debug;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::str::FromStr;

/// PayEnv is the payment environment a merchant operates in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PayEnv {
    /// Production.
    #[default]
    Prod,
    /// Sandbox, with its own set of appKeys.
    Sandbox,
}

impl PayEnv {
    /// Name used in configuration, `prod` or `sandbox`.
    pub fn as_str(self) -> &'static str {
        match self {
            PayEnv::Prod => "prod",
            PayEnv::Sandbox => "sandbox",
        }
    }

    /// Value of the `env` field in payment sign data.
    pub fn sign_data_env(self) -> u32 {
        match self {
            PayEnv::Prod => 0,
            PayEnv::Sandbox => 1,
        }
    }
}

impl FromStr for PayEnv {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Ok(PayEnv::Prod),
            "sandbox" => Ok(PayEnv::Sandbox),
            v => Err(Error::config_invalid(format!(
                "unknown payment env {v:?}, expect prod or sandbox"
            ))),
        }
    }
}

/// Config carries the shared configuration of the retail B2B service.
#[derive(Clone, Default)]
pub struct Config {
    /// `app_id` of the mini program, loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`B2BPAY_APP_ID`]
    pub app_id: Option<String>,
    /// `app_secret` of the mini program, loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`B2BPAY_APP_SECRET`]
    ///
    /// Only the token refresher needs it; calls never send it.
    pub app_secret: Option<String>,
    /// `access_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`B2BPAY_ACCESS_TOKEN`]
    pub access_token: Option<String>,
    /// `base_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`B2BPAY_BASE_URL`]
    /// - default to `https://api.weixin.qq.com`
    pub base_url: Option<String>,
    /// `env` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`B2BPAY_ENV`]
    /// - default to [`PayEnv::Prod`]
    pub env: Option<PayEnv>,
    /// Production appKeys by mchid.
    ///
    /// Env values `B2BPAY_APP_KEY_<MCHID>` are added for merchants missing here.
    pub app_keys: HashMap<String, String>,
    /// Sandbox appKeys by mchid.
    ///
    /// Env values `B2BPAY_SANDBOX_APP_KEY_<MCHID>` are added for merchants missing here.
    pub sandbox_app_keys: HashMap<String, String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mchids = |keys: &HashMap<String, String>| -> Vec<String> {
            let mut v: Vec<String> = keys.keys().cloned().collect();
            v.sort();
            v
        };
        f.debug_struct("Config")
            .field("app_id", &self.app_id)
            .field("app_secret", &self.app_secret.as_deref().map(Redact::from))
            .field(
                "access_token",
                &self.access_token.as_deref().map(Redact::from),
            )
            .field("base_url", &self.base_url)
            .field("env", &self.env)
            .field("app_keys", &mchids(&self.app_keys))
            .field("sandbox_app_keys", &mchids(&self.sandbox_app_keys))
            .finish()
    }
}

impl Config {
    /// Load config from env.
    ///
    /// Values already set on the config are kept.
    pub fn from_env(mut self, ctx: &Context) -> Result<Self> {
        if let Some(v) = ctx.env_var(B2BPAY_APP_ID) {
            self.app_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(B2BPAY_APP_SECRET) {
            self.app_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(B2BPAY_ACCESS_TOKEN) {
            self.access_token.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(B2BPAY_BASE_URL) {
            self.base_url.get_or_insert(v);
        }
        if self.env.is_none() {
            if let Some(v) = ctx.env_var(B2BPAY_ENV) {
                self.env = Some(v.parse()?);
            }
        }

        for (k, v) in ctx.env_vars() {
            if let Some(mchid) = k.strip_prefix(B2BPAY_SANDBOX_APP_KEY_PREFIX) {
                self.sandbox_app_keys.entry(mchid.to_string()).or_insert(v);
            } else if let Some(mchid) = k.strip_prefix(B2BPAY_APP_KEY_PREFIX) {
                self.app_keys.entry(mchid.to_string()).or_insert(v);
            }
        }

        debug!("loaded config: {:?}", self);
        Ok(self)
    }

    /// The configured payment environment.
    pub fn pay_env(&self) -> PayEnv {
        self.env.unwrap_or_default()
    }

    /// Look up the appKey of `mchid` for the configured environment.
    pub fn app_key(&self, mchid: &str) -> Result<&str> {
        let keys = match self.pay_env() {
            PayEnv::Prod => &self.app_keys,
            PayEnv::Sandbox => &self.sandbox_app_keys,
        };
        keys.get(mchid)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                Error::config_invalid(format!(
                    "appKey of mchid {mchid} is not configured for env {}",
                    self.pay_env().as_str()
                ))
            })
    }

    /// Build a client from this config.
    ///
    /// The access token must be present; refresh it later through
    /// [`Client::access_token`].
    pub fn build_client(&self, ctx: Context) -> Result<Client> {
        let token = self
            .access_token
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("access token is empty"))?;

        let client = Client::new(ctx, AccessToken::new(token));
        Ok(match &self.base_url {
            Some(base_url) => client.with_base_url(base_url.as_str()),
            None => client,
        })
    }
}
