//! Response normalization.
//!
//! A success status yields the parsed payload; anything else becomes an
//! [`ApiError`] built from the backend's error body. The body is consumed
//! exactly once.

use library_core::FieldError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{API_ERROR, ApiError, ClientResult};

/// Error body as sent by the backend. Every field is optional; older
/// handlers send `errorText` instead of `message`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorPayload {
    message: Option<String>,
    error_text: Option<String>,
    error_type: Option<String>,
    #[serde(default, deserialize_with = "field_errors")]
    errors: Vec<FieldError>,
}

/// Field errors, skipping entries that do not have the expected shape so the
/// rest of the payload still decodes.
fn field_errors<'de, D>(deserializer: D) -> Result<Vec<FieldError>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(field_error) => Some(field_error),
            Err(e) => {
                tracing::debug!(error = %e, "skipping malformed field error");
                None
            }
        })
        .collect())
}

/// Read a response and normalize it.
pub async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    let body = response.bytes().await?;
    normalize(status.as_u16(), &body)
}

/// Normalize a status code and raw body into a payload or an [`ApiError`].
pub fn normalize<T: DeserializeOwned>(status: u16, body: &[u8]) -> ClientResult<T> {
    if (200..300).contains(&status) {
        // An empty success body decodes as `null`.
        let body = if body.iter().all(u8::is_ascii_whitespace) {
            b"null".as_slice()
        } else {
            body
        };
        return Ok(serde_json::from_slice(body)?);
    }

    let payload: ErrorPayload = serde_json::from_slice(body).unwrap_or_default();
    Err(api_error(status, payload).into())
}

fn api_error(status: u16, payload: ErrorPayload) -> ApiError {
    ApiError {
        message: payload
            .message
            .or(payload.error_text)
            .unwrap_or_else(|| format!("HTTP error {}", status)),
        error_type: payload.error_type.unwrap_or_else(|| API_ERROR.to_string()),
        status,
        errors: payload.errors,
    }
}
