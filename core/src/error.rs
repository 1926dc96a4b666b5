//! Error types for the Live API client.
//!
//! # Design
//! Two classes of failure never mix. `ApiError` is what the service reports
//! inside a well-formed envelope (`errorCode != 0`). Everything else, from an
//! unusable path segment to a dropped connection or a body that is not the
//! expected JSON, lands in the remaining `Error` variants and is returned as
//! soon as it happens.

use thiserror::Error;

/// A non-zero `errorCode` reported by the service.
///
/// The numeric code is kept as-is so undocumented codes survive intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("Live API error {code}: {}", describe(.code))]
pub struct ApiError {
    pub code: i64,
}

/// The documented meanings of `errorCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Ok,
    UserNotFound,
    MissingRequestParameters,
    EndpointError,
    NotAuthorized,
    ServerNotFound,
    FlightNotFound,
    NoAtisAvailable,
    Undocumented,
}

impl ErrorKind {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => ErrorKind::Ok,
            1 => ErrorKind::UserNotFound,
            2 => ErrorKind::MissingRequestParameters,
            3 => ErrorKind::EndpointError,
            4 => ErrorKind::NotAuthorized,
            5 => ErrorKind::ServerNotFound,
            6 => ErrorKind::FlightNotFound,
            7 => ErrorKind::NoAtisAvailable,
            _ => ErrorKind::Undocumented,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ErrorKind::Ok => "OK",
            ErrorKind::UserNotFound => "User not found",
            ErrorKind::MissingRequestParameters => "Missing request parameters",
            ErrorKind::EndpointError => "Endpoint error",
            ErrorKind::NotAuthorized => "Not authorised (check API key)",
            ErrorKind::ServerNotFound => "Server not found",
            ErrorKind::FlightNotFound => "Flight not found",
            ErrorKind::NoAtisAvailable => "No ATIS available",
            ErrorKind::Undocumented => "Undocumented error code",
        }
    }
}

fn describe(code: &i64) -> &'static str {
    ErrorKind::from_code(*code).description()
}

impl ApiError {
    pub fn new(code: i64) -> Self {
        Self { code }
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from_code(self.code)
    }
}

/// Errors returned by `LiveClient` operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied path segment cannot be placed in a URL as-is.
    #[error("invalid path segment {segment:?}")]
    InvalidPath { segment: String },

    /// The request body could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The transport failed before a response was received.
    #[error("transport failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The response body is not the expected envelope or payload.
    #[error("deserialization failed (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The service answered with a non-zero `errorCode`.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Client configuration is missing or unusable.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// The API error carried by this value, if the service reported one.
    pub fn api(&self) -> Option<ApiError> {
        match self {
            Error::Api(err) => Some(*err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_codes_render_fixed_messages() {
        let cases = [
            (0, "Live API error 0: OK"),
            (1, "Live API error 1: User not found"),
            (2, "Live API error 2: Missing request parameters"),
            (3, "Live API error 3: Endpoint error"),
            (4, "Live API error 4: Not authorised (check API key)"),
            (5, "Live API error 5: Server not found"),
            (6, "Live API error 6: Flight not found"),
            (7, "Live API error 7: No ATIS available"),
        ];
        for (code, message) in cases {
            assert_eq!(ApiError::new(code).to_string(), message);
        }
    }

    #[test]
    fn unknown_codes_are_undocumented() {
        for code in [8, 99, -1] {
            let err = ApiError::new(code);
            assert_eq!(err.kind(), ErrorKind::Undocumented);
            assert_eq!(
                err.to_string(),
                format!("Live API error {code}: Undocumented error code")
            );
        }
    }

    #[test]
    fn api_accessor_only_matches_api_errors() {
        let err = Error::from(ApiError::new(6));
        assert_eq!(err.api(), Some(ApiError::new(6)));
        assert_eq!(err.to_string(), "Live API error 6: Flight not found");

        let err = Error::InvalidPath {
            segment: "a/b".to_string(),
        };
        assert!(err.api().is_none());
    }

    #[test]
    fn transport_error_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = Error::Transport(Box::new(io));
        let source = err.source().expect("source");
        assert_eq!(source.to_string(), "refused");
        assert!(source.downcast_ref::<std::io::Error>().is_some());
    }
}
