//! In-memory stand-in for the YouTube Data API v3 `search` and `videos` endpoints.
//!
//! Serves fixture videos from a [`Repository`] so the HTTP client and the ranking
//! pipeline can be exercised end to end without network access or an API key.

mod repository;

pub use repository::{InMemoryRepository, Repository, StoredVideo};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Largest `maxResults` the real API accepts for one page
pub const MAX_RESULTS_LIMIT: u32 = 50;

/// `maxResults` applied when the request omits it
pub const DEFAULT_MAX_RESULTS: u32 = 5;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub part: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub r#type: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub max_results: Option<u32>,
    #[serde(default)]
    pub region_code: Option<String>,
    #[serde(default)]
    pub relevance_language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VideosListParams {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub part: String,
    #[serde(default)]
    pub key: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_results: i32,
    pub results_per_page: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListResponse {
    pub kind: String,
    pub etag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    pub page_info: PageInfo,
    pub items: Vec<SearchResult>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub kind: String,
    pub etag: String,
    pub id: SearchResultId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<VideoSnippet>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    pub kind: String,
    pub video_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideosListResponse {
    pub kind: String,
    pub etag: String,
    pub page_info: PageInfo,
    pub items: Vec<Video>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub kind: String,
    pub etag: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<VideoSnippet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<VideoStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_details: Option<ContentDetails>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    pub published_at: String,
    pub channel_id: String,
    pub title: String,
    pub description: String,
    pub channel_title: String,
}

/// Counts are strings on the wire, as the real API sends them
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub like_count: Option<String>,
    pub favorite_count: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub dimension: String,
    pub definition: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub message: String,
    pub domain: String,
    pub reason: String,
}

/// Shared state behind the mock routes
#[derive(Clone)]
pub struct MockState {
    repo: Arc<dyn Repository>,
    api_key: String,
    quota_exhausted: bool,
    search_calls: Arc<AtomicUsize>,
    videos_calls: Arc<AtomicUsize>,
}

impl MockState {
    pub fn new(repo: Arc<dyn Repository>, api_key: impl Into<String>) -> Self {
        Self {
            repo,
            api_key: api_key.into(),
            quota_exhausted: false,
            search_calls: Arc::new(AtomicUsize::new(0)),
            videos_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Answer every request with a 403 `quotaExceeded` error
    pub fn with_quota_exhausted(mut self) -> Self {
        self.quota_exhausted = true;
        self
    }

    /// Number of requests received by the search endpoint
    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    /// Number of requests received by the videos endpoint
    pub fn videos_calls(&self) -> usize {
        self.videos_calls.load(Ordering::SeqCst)
    }

    fn check_access(&self, key: Option<&str>) -> Result<(), Response> {
        if key != Some(self.api_key.as_str()) {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "API key not valid. Please pass a valid API key.",
                "badRequest",
            ));
        }
        if self.quota_exhausted {
            return Err(error_response(
                StatusCode::FORBIDDEN,
                "The request cannot be completed because you have exceeded your quota.",
                "quotaExceeded",
            ));
        }
        Ok(())
    }
}

fn error_response(status: StatusCode, message: &str, reason: &str) -> Response {
    let body = ErrorResponse {
        error: ErrorBody {
            code: status.as_u16(),
            message: message.to_string(),
            errors: vec![ErrorDetail {
                message: message.to_string(),
                domain: "youtube.parameter".to_string(),
                reason: reason.to_string(),
            }],
        },
    };
    (status, Json(body)).into_response()
}

fn requested_parts(part: &str) -> Vec<&str> {
    part.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}

fn snippet_of(video: &StoredVideo) -> VideoSnippet {
    VideoSnippet {
        published_at: video.published_at.clone(),
        channel_id: video.channel_id.clone(),
        title: video.title.clone(),
        description: video.description.clone(),
        channel_title: video.channel_title.clone(),
    }
}

fn matches_query(video: &StoredVideo, query: &str) -> bool {
    let title = video.title.to_lowercase();
    query
        .split_whitespace()
        .all(|term| title.contains(&term.to_lowercase()))
}

async fn search_list(State(state): State<MockState>, Query(params): Query<SearchParams>) -> Response {
    state.search_calls.fetch_add(1, Ordering::SeqCst);
    if let Err(response) = state.check_access(params.key.as_deref()) {
        return response;
    }

    let max_results = params.max_results.unwrap_or(DEFAULT_MAX_RESULTS);
    if max_results > MAX_RESULTS_LIMIT {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Invalid value for parameter maxResults.",
            "invalidParameter",
        );
    }
    if params.r#type.as_deref().is_some_and(|kind| kind != "video") {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Only type=video is supported by the mock.",
            "invalidParameter",
        );
    }

    let include_snippet = requested_parts(&params.part).contains(&"snippet");
    let matching: Vec<StoredVideo> = state
        .repo
        .get_videos()
        .into_iter()
        .filter(|video| matches_query(video, &params.q))
        .collect();
    let total_results = matching.len() as i32;

    let items: Vec<SearchResult> = matching
        .iter()
        .take(max_results as usize)
        .map(|video| SearchResult {
            kind: "youtube#searchResult".to_string(),
            etag: format!("etag-search-{}", video.id),
            id: SearchResultId {
                kind: "youtube#video".to_string(),
                video_id: video.id.clone(),
            },
            snippet: include_snippet.then(|| snippet_of(video)),
        })
        .collect();

    tracing::debug!(q = %params.q, hits = items.len(), "mock search");

    let response = SearchListResponse {
        kind: "youtube#searchListResponse".to_string(),
        etag: "etag-search-list".to_string(),
        region_code: params.region_code,
        page_info: PageInfo {
            total_results,
            results_per_page: max_results as i32,
        },
        items,
    };

    (StatusCode::OK, Json(response)).into_response()
}

async fn videos_list(State(state): State<MockState>, Query(params): Query<VideosListParams>) -> Response {
    state.videos_calls.fetch_add(1, Ordering::SeqCst);
    if let Err(response) = state.check_access(params.key.as_deref()) {
        return response;
    }

    let ids: Vec<&str> = params
        .id
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if ids.is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "No filter selected. Expected one of: id, chart, myRated.",
            "missingRequiredParameter",
        );
    }

    let parts = requested_parts(&params.part);
    let include_snippet = parts.contains(&"snippet");
    let include_statistics = parts.contains(&"statistics");
    let include_content_details = parts.contains(&"contentDetails");

    // Unknown IDs are left out of the response, as the real API does for deleted videos
    let items: Vec<Video> = ids
        .iter()
        .filter_map(|id| state.repo.get_video(id))
        .map(|video| Video {
            kind: "youtube#video".to_string(),
            etag: format!("etag-video-{}", video.id),
            snippet: include_snippet.then(|| snippet_of(&video)),
            statistics: include_statistics.then(|| VideoStatistics {
                view_count: video.view_count.map(|n| n.to_string()),
                like_count: video.like_count.map(|n| n.to_string()),
                favorite_count: "0".to_string(),
            }),
            content_details: include_content_details.then(|| ContentDetails {
                duration: video.duration.clone(),
                dimension: "2d".to_string(),
                definition: "hd".to_string(),
            }),
            id: video.id,
        })
        .collect();

    let response = VideosListResponse {
        kind: "youtube#videoListResponse".to_string(),
        etag: "etag-video-list".to_string(),
        page_info: PageInfo {
            total_results: items.len() as i32,
            results_per_page: items.len() as i32,
        },
        items,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Create the router for the mock Data API
pub fn create_router(state: MockState) -> Router {
    Router::new()
        .route("/youtube/v3/search", get(search_list))
        .route("/youtube/v3/videos", get(videos_list))
        .with_state(state)
}

/// A mock API served on an ephemeral localhost port
///
/// The server task is aborted when the handle is dropped.
pub struct MockServer {
    addr: SocketAddr,
    state: MockState,
    task: JoinHandle<()>,
}

impl MockServer {
    pub async fn start(state: MockState) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let router = create_router(state.clone());
        let task = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, router).await {
                tracing::error!(%err, "mock API server stopped");
            }
        });
        Ok(Self { addr, state, task })
    }

    /// API root to hand to a client, e.g. `http://127.0.0.1:PORT/youtube/v3`
    pub fn base_url(&self) -> String {
        format!("http://{}/youtube/v3", self.addr)
    }

    pub fn state(&self) -> &MockState {
        &self.state
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
