//! Runtime configuration.
//!
//! Only the quote backend address comes from the environment
//! (`TICKERDECK_BACKEND_URL`, `.env` honoured). Everything else is set in
//! code through the `with_*` builders and falls back to the defaults below.

use std::time::Duration;

use url::Url;

use tickerdeck_market_data::{DEFAULT_BACKEND_URL, DEFAULT_SEARCH_URL};

use crate::errors::{Error, Result};
use crate::logging::LogFormat;
use crate::price::DEFAULT_EMA_PERIOD;
use crate::search::DEFAULT_SEARCH_DEBOUNCE;

pub const BACKEND_URL_ENV: &str = "TICKERDECK_BACKEND_URL";

/// Logo CDN used for symbols without a catalog icon.
pub const DEFAULT_LOGO_CDN_TEMPLATE: &str = "https://assets.fey.com/logos/{symbol}.svg";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub backend_url: String,
    pub search_url: String,
    pub logo_cdn_template: String,
    pub search_debounce: Duration,
    pub ema_period: u32,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            logo_cdn_template: DEFAULT_LOGO_CDN_TEMPLATE.to_string(),
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
            ema_period: DEFAULT_EMA_PERIOD,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = Self::default();
        match lookup(BACKEND_URL_ENV) {
            Some(url) if !url.trim().is_empty() => config.with_backend_url(url.trim()),
            _ => Ok(config),
        }
    }

    pub fn with_backend_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.backend_url = normalize_base_url(url.as_ref())?;
        Ok(self)
    }

    pub fn with_search_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.search_url = normalize_base_url(url.as_ref())?;
        Ok(self)
    }

    pub fn with_logo_cdn_template(mut self, template: impl Into<String>) -> Self {
        self.logo_cdn_template = template.into();
        self
    }

    pub fn with_search_debounce(mut self, debounce: Duration) -> Self {
        self.search_debounce = debounce;
        self
    }

    pub fn with_ema_period(mut self, period: u32) -> Result<Self> {
        if period == 0 {
            return Err(Error::InvalidConfigValue(
                "EMA period must be at least 1".to_string(),
            ));
        }
        self.ema_period = period;
        Ok(self)
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }
}

/// Parse an http(s) base URL and drop any trailing slash.
fn normalize_base_url(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw)
        .map_err(|e| Error::InvalidConfigValue(format!("{:?} is not a valid URL: {}", raw, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(raw.trim_end_matches('/').to_string()),
        other => Err(Error::InvalidConfigValue(format!(
            "{:?} must use http or https, not {}",
            raw, other
        ))),
    }
}
