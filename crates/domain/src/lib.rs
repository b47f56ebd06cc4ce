use serde::{Deserialize, Serialize};

/// Base URL a video identifier is appended to for playback
pub const WATCH_BASE_URL: &str = "https://www.youtube.com/watch?v=";

/// Build the playback URL for a video identifier
pub fn watch_url(id: &str) -> String {
    format!("{}{}", WATCH_BASE_URL, id)
}

/// Represents a video hydrated with its statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub channel: String,
    pub published_at: String,
    pub views: u64,
    /// Zero when likes are hidden or disabled for the video
    pub likes: u64,
    /// Whole seconds; `None` when the duration was missing or unparsable
    pub duration_s: Option<u64>,
    pub url: String,
}
