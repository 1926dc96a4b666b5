//! Client configuration: the bearer key and the API origin.

use crate::error::Error;

/// Public Live API origin. Every path is relative to it.
pub const DEFAULT_BASE_URL: &str = "https://api.infiniteflight.com/public/v2/";

pub const API_KEY_ENV: &str = "LIVE_API_KEY";
pub const BASE_URL_ENV: &str = "LIVE_API_BASE_URL";

#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    base_url: String,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at another origin, e.g. a local mock server.
    /// A trailing `/` is added when missing.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let mut url = base_url.to_string();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    /// Read `LIVE_API_KEY` and, if set, `LIVE_API_BASE_URL`.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::Config(format!("{API_KEY_ENV} is not set")))?;
        if api_key.trim().is_empty() {
            return Err(Error::Config(format!("{API_KEY_ENV} is empty")));
        }

        let config = Self::new(api_key);
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Ok(config.with_base_url(url.trim())),
            _ => Ok(config),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
