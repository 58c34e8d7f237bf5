//! Response decoding.

use serde::de::DeserializeOwned;
use stripe_lite_core::ApiError;

use crate::error::ClientError;
use crate::transport::ApiResponse;

/// Decode a response into `T` or the error it carries.
///
/// The JSON shape decides: a body with a well-formed `error` member is an
/// [`ApiError`] whatever the status. Any other non-success response becomes
/// [`ClientError::UnexpectedStatus`].
///
/// # Errors
///
/// Returns [`ClientError::Api`] for error envelopes,
/// [`ClientError::UnexpectedStatus`] for other failures and
/// [`ClientError::Decode`] when a success body does not fit `T`.
pub fn decode<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, ClientError> {
    let value: serde_json::Value = match serde_json::from_str(&response.body) {
        Ok(value) => value,
        Err(_) if !response.is_success() => return Err(unexpected(response)),
        Err(e) => return Err(ClientError::Decode(e)),
    };

    if value.get("error").is_some_and(serde_json::Value::is_object) {
        let error: ApiError = match serde_json::from_value(value) {
            Ok(error) => error,
            Err(_) if !response.is_success() => return Err(unexpected(response)),
            Err(e) => return Err(ClientError::Decode(e)),
        };
        tracing::debug!(
            status = response.status,
            error_type = %error.error_type,
            code = ?error.code,
            "Stripe returned an error"
        );
        return Err(ClientError::Api(error));
    }

    if !response.is_success() {
        return Err(unexpected(response));
    }

    Ok(serde_json::from_value(value)?)
}

fn unexpected(response: &ApiResponse) -> ClientError {
    ClientError::UnexpectedStatus {
        status: response.status,
        body: response.body.clone(),
    }
}
