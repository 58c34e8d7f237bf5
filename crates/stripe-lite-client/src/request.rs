//! Authenticated request construction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// HTTP method of an API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `DELETE`
    Delete,
}

impl Method {
    /// The method name as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transport-independent API request.
///
/// `params` travel as a form body for `POST` and as the query string otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Path below the API base, always starting with `/v1/`.
    pub path: String,
    /// Request headers, including `Authorization`.
    pub headers: Vec<(String, String)>,
    /// Form or query parameters, in insertion order.
    pub params: Vec<(String, String)>,
}

impl ApiRequest {
    /// Look up a header value, ignoring case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Look up the first parameter with the given key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Short `METHOD /path` form used in logs and fixture errors.
    #[must_use]
    pub fn target(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

/// Builder for [`ApiRequest`].
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    request: ApiRequest,
}

impl RequestBuilder {
    /// Start a request for `path` relative to `/v1`.
    ///
    /// A leading `/v1` or `/` on `path` is accepted, so `"customers"`,
    /// `"/customers"` and `"/v1/customers"` all produce `/v1/customers`.
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        let trimmed = path.trim_start_matches('/');
        let trimmed = trimmed.strip_prefix("v1/").unwrap_or(trimmed);
        Self {
            request: ApiRequest {
                method,
                path: format!("/v1/{trimmed}"),
                headers: Vec::new(),
                params: Vec::new(),
            },
        }
    }

    /// Authenticate with a secret key.
    #[must_use]
    pub fn api_key(self, key: &str) -> Self {
        self.header("Authorization", format!("Bearer {key}"))
    }

    /// Attach an `Idempotency-Key` header.
    #[must_use]
    pub fn idempotency_key(self, key: impl Into<String>) -> Self {
        self.header("Idempotency-Key", key)
    }

    /// Add a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.headers.push((name.into(), value.into()));
        self
    }

    /// Add a parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.request.params.push((key.into(), value.to_string()));
        self
    }

    /// Add a parameter only when `value` is present.
    #[must_use]
    pub fn param_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    /// Add `metadata[key]=value` parameters.
    #[must_use]
    pub fn metadata(mut self, metadata: &BTreeMap<String, String>) -> Self {
        for (k, v) in metadata {
            self = self.param(format!("metadata[{k}]"), v);
        }
        self
    }

    /// Finish the request.
    #[must_use]
    pub fn build(self) -> ApiRequest {
        self.request
    }
}
