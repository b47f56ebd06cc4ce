use serde::Deserialize;
use thiserror::Error;

/// Failures talking to the Data API
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, TLS, body read).
    /// The request URL is stripped since it carries the API key.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API answered with a non-success status
    #[error("HTTP {status} from {endpoint}: {message}")]
    Status {
        endpoint: &'static str,
        status: u16,
        message: String,
        reason: Option<String>,
    },

    /// A success response whose body does not match the expected shape
    #[error("malformed {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }
}

impl ApiError {
    /// Build a `Status` error from a Google error envelope, falling back to the raw body
    pub(crate) fn from_status(endpoint: &'static str, status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => Self::Status {
                endpoint,
                status,
                reason: envelope
                    .error
                    .errors
                    .into_iter()
                    .find_map(|detail| detail.reason),
                message: envelope.error.message,
            },
            Err(_) => {
                let body = body.trim();
                Self::Status {
                    endpoint,
                    status,
                    message: if body.is_empty() {
                        "empty response body".to_string()
                    } else {
                        body.to_string()
                    },
                    reason: None,
                }
            }
        }
    }

    /// Machine-readable reason, e.g. `quotaExceeded`
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Status { reason, .. } => reason.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    reason: Option<String>,
}
