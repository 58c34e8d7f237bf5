//! Stripe error envelope.
//!
//! Stripe reports failures as a JSON object wrapped in an `error` member:
//!
//! ```json
//! {
//!   "error": {
//!     "code": "resource_missing",
//!     "doc_url": "https://stripe.com/docs/error-codes/resource-missing",
//!     "message": "No such customer: 'cus_123'",
//!     "param": "customer",
//!     "type": "invalid_request_error"
//!   }
//! }
//! ```
//!
//! [`ApiError`] serializes to and deserializes from that envelope directly,
//! so a record survives a JSON round trip unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An error reported by the Stripe API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(from = "ErrorEnvelope", into = "ErrorEnvelope")]
#[error("{error_type}: {message}{}", code_suffix(.code.as_deref()))]
pub struct ApiError {
    /// Short machine-readable code, e.g. `resource_missing`.
    pub code: Option<String>,
    /// Link to the vendor documentation for `code`.
    pub doc_url: Option<String>,
    /// Human-readable message.
    pub message: String,
    /// The request parameter the error relates to.
    pub param: Option<String>,
    /// Classification string, e.g. `invalid_request_error`. Kept verbatim.
    pub error_type: String,
}

fn code_suffix(code: Option<&str>) -> String {
    code.map(|c| format!(" (code: {c})")).unwrap_or_default()
}

impl ApiError {
    /// Create an error with a type and message and no optional fields.
    #[must_use]
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: None,
            doc_url: None,
            message: message.into(),
            param: None,
            error_type: error_type.into(),
        }
    }

    /// Set the error code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the offending parameter.
    #[must_use]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    /// Set the documentation URL.
    #[must_use]
    pub fn with_doc_url(mut self, doc_url: impl Into<String>) -> Self {
        self.doc_url = Some(doc_url.into());
        self
    }

    /// Classify the error by its `type` string.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from_type(&self.error_type)
    }
}

/// Wire shape of [`ApiError`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    doc_url: Option<String>,
    #[serde(default)]
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    param: Option<String>,
    #[serde(rename = "type")]
    error_type: String,
}

impl From<ErrorEnvelope> for ApiError {
    fn from(envelope: ErrorEnvelope) -> Self {
        let ErrorBody {
            code,
            doc_url,
            message,
            param,
            error_type,
        } = envelope.error;
        Self {
            code,
            doc_url,
            message,
            param,
            error_type,
        }
    }
}

impl From<ApiError> for ErrorEnvelope {
    fn from(error: ApiError) -> Self {
        Self {
            error: ErrorBody {
                code: error.code,
                doc_url: error.doc_url,
                message: error.message,
                param: error.param,
                error_type: error.error_type,
            },
        }
    }
}

/// Classification of an [`ApiError`], derived from its `type` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Failure to connect to Stripe.
    ApiConnection,
    /// Stripe-side problem.
    Api,
    /// Bad or missing API key.
    Authentication,
    /// The card could not be charged.
    Card,
    /// An idempotency key was reused with different parameters.
    Idempotency,
    /// Invalid parameters.
    InvalidRequest,
    /// Too many requests.
    RateLimit,
    /// A type this client does not know.
    Other,
}

impl ErrorKind {
    /// Map a vendor `type` string to a kind.
    #[must_use]
    pub fn from_type(error_type: &str) -> Self {
        match error_type {
            "api_connection_error" => Self::ApiConnection,
            "api_error" => Self::Api,
            "authentication_error" => Self::Authentication,
            "card_error" => Self::Card,
            "idempotency_error" => Self::Idempotency,
            "invalid_request_error" => Self::InvalidRequest,
            "rate_limit_error" => Self::RateLimit,
            _ => Self::Other,
        }
    }

    /// The vendor `type` string for known kinds.
    #[must_use]
    pub const fn as_str(self) -> Option<&'static str> {
        match self {
            Self::ApiConnection => Some("api_connection_error"),
            Self::Api => Some("api_error"),
            Self::Authentication => Some("authentication_error"),
            Self::Card => Some("card_error"),
            Self::Idempotency => Some("idempotency_error"),
            Self::InvalidRequest => Some("invalid_request_error"),
            Self::RateLimit => Some("rate_limit_error"),
            Self::Other => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or("other"))
    }
}
