use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::debug;

use crate::error::ApiError;
use crate::types::{SearchListResponse, SearchRequest, VideoListResponse};

/// Default Data API root
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Parts requested from `videos.list` when hydrating search results
pub const VIDEO_PARTS: &str = "snippet,statistics,contentDetails";

/// The two Data API calls the finder makes
///
/// Abstracted so the pipeline can run against the HTTP client, the mock server,
/// or an in-process fake.
#[async_trait]
pub trait YouTubeApi: Send + Sync {
    /// `search.list`: one page of results for a free-text query
    async fn search_list(&self, request: &SearchRequest) -> Result<SearchListResponse, ApiError>;

    /// `videos.list`: snippet, statistics and content details for a batch of IDs
    async fn videos_list(&self, ids: &[String]) -> Result<VideoListResponse, ApiError>;
}

/// reqwest-backed Data API client authenticated with an API key
///
/// No request timeout is set; an unresponsive upstream blocks the call.
#[derive(Clone)]
pub struct HttpYouTubeApi {
    client: Client,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for HttpYouTubeApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpYouTubeApi")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl HttpYouTubeApi {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("yt-top/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(endpoint, params = params.len(), "issuing Data API request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(endpoint, status = status.as_u16(), bytes = body.len(), "received response");

        if !status.is_success() {
            return Err(ApiError::from_status(endpoint, status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Decode { endpoint, source })
    }
}

#[async_trait]
impl YouTubeApi for HttpYouTubeApi {
    async fn search_list(&self, request: &SearchRequest) -> Result<SearchListResponse, ApiError> {
        self.get("search", &request.query_pairs()).await
    }

    async fn videos_list(&self, ids: &[String]) -> Result<VideoListResponse, ApiError> {
        let params = [("part", VIDEO_PARTS.to_string()), ("id", ids.join(","))];
        self.get("videos", &params).await
    }
}
