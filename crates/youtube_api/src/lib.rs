//! Minimal YouTube Data API v3 client covering `search.list` and `videos.list`.

mod client;
mod error;
pub mod types;

pub use client::{DEFAULT_BASE_URL, HttpYouTubeApi, VIDEO_PARTS, YouTubeApi};
pub use error::ApiError;
pub use types::{SearchListResponse, SearchRequest, Video, VideoListResponse};
