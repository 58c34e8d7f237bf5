//! Client configuration.

use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::transport::HttpTransport;

/// Settings for a live client.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Secret API key (`sk_test_...` or `sk_live_...`).
    pub api_key: String,

    /// API base URL (default: `https://api.stripe.com`).
    pub base_url: String,

    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

/// Stripe secrets file structure.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct StripeSecrets {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    api_key_test: Option<String>,
    #[serde(default)]
    base_url: Option<String>,
}

impl ClientConfig {
    /// Secrets files tried by [`ClientConfig::from_env`], in order.
    pub const SECRET_PATHS: [&'static str; 2] = [".secrets/stripe.json", "../.secrets/stripe.json"];

    /// Create a configuration for `api_key` with default settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: HttpTransport::DEFAULT_BASE_URL.to_string(),
            timeout_seconds: HttpTransport::DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Load configuration from a secrets file or the environment.
    ///
    /// Secrets files take precedence over `STRIPE_API_KEY`; `api_key_test`
    /// is preferred over `api_key`. `STRIPE_API_BASE` overrides the file's
    /// `base_url`, and `STRIPE_TIMEOUT_SECONDS` overrides the default timeout.
    ///
    /// Returns `None` when no API key is available.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let secrets = Self::SECRET_PATHS.iter().find_map(|path| read_secrets(path));
        if secrets.is_none() {
            tracing::debug!("Stripe secrets file not found, using environment variables");
        }
        Self::resolve(secrets, |name| std::env::var(name).ok())
    }

    /// Combine parsed secrets with environment lookups.
    fn resolve(
        secrets: Option<StripeSecrets>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Option<Self> {
        let (file_key, file_base_url) = match secrets {
            Some(s) => (s.api_key_test.or(s.api_key), s.base_url),
            None => (None, None),
        };

        let api_key = file_key
            .filter(|k| !k.is_empty())
            .or_else(|| env("STRIPE_API_KEY").filter(|k| !k.is_empty()))?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = env("STRIPE_API_BASE").or(file_base_url) {
            config.base_url = base_url;
        }
        if let Some(timeout) = env("STRIPE_TIMEOUT_SECONDS").and_then(|s| s.parse().ok()) {
            config.timeout_seconds = timeout;
        }

        Some(config)
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}

/// Read one secrets file, keeping it only if it carries a key.
fn read_secrets(path: &str) -> Option<StripeSecrets> {
    match load_secrets_file(path) {
        Ok(Some(secrets)) if secrets.api_key_test.is_some() || secrets.api_key.is_some() => {
            tracing::info!(path = %path, "Loaded Stripe secrets from file");
            Some(secrets)
        }
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(path = %path, error = %e, "Ignoring unreadable secrets file");
            None
        }
    }
}

/// Load secrets from a JSON file; `Ok(None)` when it does not exist.
fn load_secrets_file(path: &str) -> Result<Option<StripeSecrets>, std::io::Error> {
    let path = Path::new(path);
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
