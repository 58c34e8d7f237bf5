//! Client error types.

use stripe_lite_core::{ApiError, ErrorKind, IdError};

/// Errors that can occur when using the Stripe client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Stripe returned an error envelope.
    #[error("Stripe API error: {0}")]
    Api(#[from] ApiError),

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Non-success status without an error envelope.
    #[error("unexpected HTTP {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Parameters were rejected before sending.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(#[from] IdError),
}

impl ClientError {
    /// The vendor error record, if Stripe returned one.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// The vendor error classification, if Stripe returned an error.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        self.api_error().map(ApiError::kind)
    }
}

/// Errors raised by a [`Transport`](crate::Transport).
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading or writing a fixture file failed.
    #[error("fixture I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A fixture file is not valid JSON.
    #[error("fixture format error: {0}")]
    Fixture(#[from] serde_json::Error),

    /// The next recorded exchange is for a different request.
    #[error("fixture mismatch: expected {expected}, got {actual}")]
    FixtureMismatch {
        /// `METHOD /path` of the recorded exchange.
        expected: String,
        /// `METHOD /path` of the request that was sent.
        actual: String,
    },

    /// Every recorded exchange has been replayed.
    #[error("fixture {name} has no exchanges left")]
    FixtureExhausted {
        /// Fixture name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_only_for_api_errors() {
        let err = ClientError::from(ApiError::new("card_error", "declined"));
        assert_eq!(err.kind(), Some(ErrorKind::Card));

        let err = ClientError::UnexpectedStatus {
            status: 502,
            body: "bad gateway".into(),
        };
        assert!(err.kind().is_none());
        assert!(err.api_error().is_none());
    }

    #[test]
    fn transport_error_converts() {
        let err: ClientError = TransportError::FixtureExhausted {
            name: "customer".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "transport error: fixture customer has no exchanges left"
        );
    }
}
