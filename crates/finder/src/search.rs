use tracing::debug;
use youtube_api::{SearchRequest, YouTubeApi};

use crate::error::Result;

/// Largest page the search endpoint serves
pub const MAX_RESULTS_PER_PAGE: u32 = 50;

pub const DEFAULT_MAX_RESULTS: u32 = 25;

/// Constraints for the candidate search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Clamped to [`MAX_RESULTS_PER_PAGE`] before the request is built
    pub max_results: u32,
    /// ISO 3166-1 alpha-2 region, e.g. `US`
    pub region_code: Option<String>,
    /// ISO 639-1 language whose results should rank higher, e.g. `en`
    pub relevance_language: Option<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            region_code: None,
            relevance_language: None,
        }
    }
}

/// Find candidate video IDs for a topic with a single `search.list` call.
///
/// IDs come back in the API's relevance order. No matches is an empty list.
pub async fn search_video_ids(
    api: &dyn YouTubeApi,
    topic: &str,
    options: &SearchOptions,
) -> Result<Vec<String>> {
    let request = SearchRequest {
        query: topic.to_string(),
        max_results: options.max_results.min(MAX_RESULTS_PER_PAGE),
        region_code: options.region_code.clone(),
        relevance_language: options.relevance_language.clone(),
    };

    let response = api.search_list(&request).await?;
    let ids: Vec<String> = response
        .items
        .into_iter()
        .map(|item| item.id.video_id)
        .collect();

    debug!(topic, max_results = request.max_results, hits = ids.len(), "search complete");
    Ok(ids)
}
