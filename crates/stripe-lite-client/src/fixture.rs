//! Recorded fixtures.
//!
//! A fixture is a JSON file `{dir}/{name}.json` holding the exchanges one
//! test performed, in order:
//!
//! ```json
//! [
//!   {
//!     "method": "POST",
//!     "path": "/v1/customers",
//!     "params": [["source", "tok_amex"]],
//!     "status": 200,
//!     "body": { "id": "cus_...", "object": "customer" }
//!   }
//! ]
//! ```
//!
//! A body that is not JSON is stored verbatim in `body_text` instead of
//! `body`. JSON bodies are replayed re-serialized, so whitespace may differ.
//!
//! Headers are never written, so recorded fixtures do not contain the API key.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use crate::error::TransportError;
use crate::request::{ApiRequest, Method};
use crate::transport::{ApiResponse, Transport};

/// One recorded request/response pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    /// Request method.
    pub method: Method,
    /// Request path.
    pub path: String,
    /// Request parameters.
    #[serde(default)]
    pub params: Vec<(String, String)>,
    /// Response status.
    pub status: u16,
    /// Response body, when it was JSON.
    #[serde(default)]
    pub body: serde_json::Value,
    /// Raw response body, when it was not JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_text: Option<String>,
}

impl Exchange {
    fn record(request: &ApiRequest, response: &ApiResponse) -> Self {
        let (body, body_text) = match serde_json::from_str::<serde_json::Value>(&response.body) {
            Ok(value) => (value, None),
            Err(_) => (serde_json::Value::Null, Some(response.body.clone())),
        };
        Self {
            method: request.method,
            path: request.path.clone(),
            params: request.params.clone(),
            status: response.status,
            body,
            body_text,
        }
    }

    fn response(&self) -> ApiResponse {
        let body = match &self.body_text {
            Some(raw) => raw.clone(),
            None => self.body.to_string(),
        };
        ApiResponse {
            status: self.status,
            body,
        }
    }

    fn target(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

/// Path of the fixture file for `name` in `dir`.
#[must_use]
pub(crate) fn fixture_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.json"))
}

/// Replays a recorded fixture.
#[derive(Debug)]
pub struct FixtureTransport {
    name: String,
    exchanges: Mutex<VecDeque<Exchange>>,
}

impl FixtureTransport {
    /// Load `{dir}/{name}.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a list of exchanges.
    pub async fn load(dir: impl AsRef<Path>, name: &str) -> Result<Self, TransportError> {
        let path = fixture_path(dir.as_ref(), name);
        let contents = tokio::fs::read_to_string(&path).await?;
        let exchanges: Vec<Exchange> = serde_json::from_str(&contents)?;

        tracing::info!(
            path = %path.display(),
            exchanges = exchanges.len(),
            "Loaded Stripe fixture"
        );

        Ok(Self::from_exchanges(name, exchanges))
    }

    /// Build a fixture from exchanges held in memory.
    #[must_use]
    pub fn from_exchanges(name: impl Into<String>, exchanges: Vec<Exchange>) -> Self {
        Self {
            name: name.into(),
            exchanges: Mutex::new(exchanges.into()),
        }
    }

    /// Number of exchanges not yet replayed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.exchanges
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl Transport for FixtureTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut exchanges = self
            .exchanges
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let next = exchanges
            .front()
            .ok_or_else(|| TransportError::FixtureExhausted {
                name: self.name.clone(),
            })?;

        if next.method != request.method || next.path != request.path {
            return Err(TransportError::FixtureMismatch {
                expected: next.target(),
                actual: request.target(),
            });
        }

        let response = next.response();
        exchanges.pop_front();

        tracing::debug!(fixture = %self.name, target = %request.target(), "Replayed exchange");
        Ok(response)
    }
}

/// Forwards to another transport and records every exchange.
#[derive(Debug)]
pub struct RecordingTransport<T> {
    inner: T,
    dir: PathBuf,
    name: String,
    exchanges: Mutex<Vec<Exchange>>,
}

impl<T: Transport> RecordingTransport<T> {
    /// Record exchanges sent through `inner` into `{dir}/{name}.json`.
    pub fn new(inner: T, dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            inner,
            dir: dir.into(),
            name: name.into(),
            exchanges: Mutex::new(Vec::new()),
        }
    }

    /// Exchanges recorded so far.
    #[must_use]
    pub fn exchanges(&self) -> Vec<Exchange> {
        self.exchanges
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Write the fixture file, creating the directory if needed.
    ///
    /// Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn save(&self) -> Result<PathBuf, TransportError> {
        let json = serde_json::to_string_pretty(&self.exchanges())?;
        let path = fixture_path(&self.dir, &self.name);

        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(&path, json).await?;

        tracing::info!(path = %path.display(), "Saved Stripe fixture");
        Ok(path)
    }
}

#[async_trait]
impl<T: Transport> Transport for RecordingTransport<T> {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let response = self.inner.send(request).await?;
        self.exchanges
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Exchange::record(request, &response));
        Ok(response)
    }
}

/// How tests obtain API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixtureMode {
    /// Call the live API without recording.
    Live,
    /// Call the live API and write fixtures.
    Record,
    /// Replay fixtures from disk.
    #[default]
    Replay,
}

impl FixtureMode {
    /// Environment variable consulted by [`FixtureMode::from_env`].
    pub const ENV_VAR: &'static str = "STRIPE_FIXTURES";

    /// Read the mode from `STRIPE_FIXTURES`, defaulting to replay.
    ///
    /// Unrecognized values fall back to replay with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_setting(std::env::var(Self::ENV_VAR).ok().as_deref())
    }

    /// Interpret a `STRIPE_FIXTURES` value; `None` means unset.
    fn from_setting(value: Option<&str>) -> Self {
        match value {
            Some(value) => value.parse().unwrap_or_else(|()| {
                tracing::warn!(value = %value, "Unknown fixture mode, replaying fixtures");
                Self::Replay
            }),
            None => Self::Replay,
        }
    }

    /// Whether this mode needs real credentials.
    #[must_use]
    pub const fn is_live(self) -> bool {
        matches!(self, Self::Live | Self::Record)
    }
}

impl FromStr for FixtureMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "record" | "update" => Ok(Self::Record),
            "replay" | "" => Ok(Self::Replay),
            _ => Err(()),
        }
    }
}
