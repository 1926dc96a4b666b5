//! The `{errorCode, result}` wrapper around every Live API response.
//!
//! Decoding happens in two steps. The envelope is read with the payload left
//! as an untyped JSON value; a non-zero code ends decoding there, whatever the
//! payload holds (usually `null`). Only a zero code gets the payload decoded
//! as the caller's type.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Error};
use crate::http::HttpResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub error_code: i64,
    pub result: T,
}

impl<T> Envelope<T> {
    /// The payload when `errorCode` is zero, the API error otherwise.
    pub fn into_result(self) -> Result<T, ApiError> {
        if self.error_code == 0 {
            Ok(self.result)
        } else {
            Err(ApiError::new(self.error_code))
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnvelope {
    error_code: i64,
    #[serde(default)]
    result: serde_json::Value,
}

/// Decode a response body into the typed payload of its envelope.
pub fn decode_envelope<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, Error> {
    let status = response.status;
    let raw: RawEnvelope = serde_json::from_str(&response.body)
        .map_err(|source| Error::Decode { status, source })?;

    let envelope = Envelope {
        error_code: raw.error_code,
        result: raw.result,
    };
    let payload = envelope.into_result().map_err(|err| {
        tracing::warn!(code = err.code, status, "live api returned an error code");
        err
    })?;

    serde_json::from_value(payload).map_err(|source| Error::Decode { status, source })
}
