use thiserror::Error;
use youtube_api::ApiError;

/// Result type for finder operations.
pub type Result<T> = std::result::Result<T, FinderError>;

/// Top-level failure categories, each printed with its own label
#[derive(Debug, Error)]
pub enum FinderError {
    /// Required configuration (the API key) is missing; raised before any request
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The Data API could not be reached or rejected the call
    #[error("YouTube API error: {0}")]
    ExternalService(ApiError),

    /// Anything else, e.g. a response body of the wrong shape
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<ApiError> for FinderError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Decode { .. } => Self::Unexpected(err.to_string()),
            other => Self::ExternalService(other),
        }
    }
}
