//! Failure kinds surfaced by the Releases API client.

use log::debug;
use serde::Deserialize;

/// Error body returned by the service alongside a non-200 status.
///
/// Both fields default so that any JSON object is accepted as an error
/// body, even one missing `code` or `message`.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub(crate) struct ErrorResponse {
    pub code: i64,
    pub message: String,
}

/// Errors produced while building, sending, or decoding a request.
#[derive(Debug)]
pub enum ApiError {
    /// The request URL could not be constructed. No call was made.
    InvalidUrl { url: String, reason: String },
    /// Connection failure, timeout, or a broken response body.
    Transport(reqwest::Error),
    /// Non-200 response carrying a decodable error body.
    Remote { status: u16, message: String },
    /// Non-200 response whose body was not a JSON error object.
    UnknownStatus { status: u16 },
    /// A 200 response whose body did not match the expected shape.
    Decode(serde_json::Error),
}

impl ApiError {
    /// HTTP status reported by the service, if the call got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Remote { status, .. } | ApiError::UnknownStatus { status } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::InvalidUrl { .. } | ApiError::Decode(_) => None,
        }
    }

    /// True when the whole-request timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Transport(e) if e.is_timeout())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::InvalidUrl { url, reason } => {
                write!(f, "invalid request url {}: {}", url, reason)
            }
            ApiError::Transport(e) => write!(f, "{}", e),
            ApiError::Remote { status, message } => {
                write!(f, "error: {}; status code: {}", message, status)
            }
            ApiError::UnknownStatus { status } => {
                write!(f, "unknown error, status code: {}", status)
            }
            ApiError::Decode(e) => write!(f, "error decoding response body: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            ApiError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e)
    }
}

/// Maps a non-200 response body to the matching error kind.
///
/// Only the first JSON value of the body is read, so trailing bytes are
/// ignored and a literal `null` counts as an empty error object.
pub(crate) fn classify_failure(status: u16, body: &str) -> ApiError {
    let first = serde_json::Deserializer::from_str(body)
        .into_iter::<Option<ErrorResponse>>()
        .next();
    match first {
        Some(Ok(err)) => {
            let err = err.unwrap_or_default();
            debug!("Service reported code {}: {}", err.code, err.message);
            ApiError::Remote {
                status,
                message: err.message,
            }
        }
        _ => ApiError::UnknownStatus { status },
    }
}
