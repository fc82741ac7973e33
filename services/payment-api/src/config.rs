use std::fmt::{Debug, Formatter};

use log::warn;
use paymenthighway_core::{utils::Redact, Context};

use super::constants::*;

/// Config carries all the configuration for the Payment Highway API.
#[derive(Clone, Default)]
pub struct Config {
    /// `service_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `PAYMENT_HIGHWAY_SERVICE_URL`
    ///
    /// It must be scheme and host only, like `https://v1-hub-staging.sph-test-solinor.com`.
    pub service_url: Option<String>,
    /// `signature_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `PAYMENT_HIGHWAY_SIGNATURE_KEY_ID`
    pub signature_key_id: Option<String>,
    /// `signature_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `PAYMENT_HIGHWAY_SIGNATURE_SECRET`
    pub signature_secret: Option<String>,
    /// `account` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `PAYMENT_HIGHWAY_ACCOUNT`
    pub account: Option<String>,
    /// `merchant` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `PAYMENT_HIGHWAY_MERCHANT`
    pub merchant: Option<String>,
    /// `check_response_status` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `PAYMENT_HIGHWAY_CHECK_RESPONSE_STATUS` (`true` or `false`)
    ///
    /// When enabled, every response whose result code isn't `100` turns into an error.
    /// Disabled by default.
    pub check_response_status: Option<bool>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set service_url
    pub fn with_service_url(mut self, service_url: impl Into<String>) -> Self {
        self.service_url = Some(service_url.into());
        self
    }

    /// Set signature_key_id
    pub fn with_signature_key_id(mut self, signature_key_id: impl Into<String>) -> Self {
        self.signature_key_id = Some(signature_key_id.into());
        self
    }

    /// Set signature_secret
    pub fn with_signature_secret(mut self, signature_secret: impl Into<String>) -> Self {
        self.signature_secret = Some(signature_secret.into());
        self
    }

    /// Set account
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Set merchant
    pub fn with_merchant(mut self, merchant: impl Into<String>) -> Self {
        self.merchant = Some(merchant.into());
        self
    }

    /// Set check_response_status
    pub fn with_check_response_status(mut self, check_response_status: bool) -> Self {
        self.check_response_status = Some(check_response_status);
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(PAYMENT_HIGHWAY_SERVICE_URL) {
            self.service_url.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(PAYMENT_HIGHWAY_SIGNATURE_KEY_ID) {
            self.signature_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(PAYMENT_HIGHWAY_SIGNATURE_SECRET) {
            self.signature_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(PAYMENT_HIGHWAY_ACCOUNT) {
            self.account.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(PAYMENT_HIGHWAY_MERCHANT) {
            self.merchant.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(PAYMENT_HIGHWAY_CHECK_RESPONSE_STATUS) {
            match v.trim().to_ascii_lowercase().as_str() {
                "true" | "on" | "1" => {
                    self.check_response_status.get_or_insert(true);
                }
                "false" | "off" | "0" => {
                    self.check_response_status.get_or_insert(false);
                }
                _ => warn!("ignoring invalid {PAYMENT_HIGHWAY_CHECK_RESPONSE_STATUS}: {v}"),
            }
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("service_url", &self.service_url)
            .field("signature_key_id", &self.signature_key_id)
            .field(
                "signature_secret",
                &self.signature_secret.as_ref().map(Redact::from),
            )
            .field("account", &self.account)
            .field("merchant", &self.merchant)
            .field("check_response_status", &self.check_response_status)
            .finish()
    }
}
