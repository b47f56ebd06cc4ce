//! Typed request and response structures for the `search.list` and `videos.list`
//! endpoints.
//!
//! Fields the pipeline can live without are defaulted here, at the
//! deserialization boundary, so callers never deal with missing blocks.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Parameters of a single-page `search.list` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub max_results: u32,
    pub region_code: Option<String>,
    pub relevance_language: Option<String>,
}

impl SearchRequest {
    /// Query-string pairs, excluding the API key
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("part", "snippet".to_string()),
            ("q", self.query.clone()),
            ("type", "video".to_string()),
            ("maxResults", self.max_results.to_string()),
            ("order", "relevance".to_string()),
        ];
        if let Some(region) = &self.region_code {
            pairs.push(("regionCode", region.clone()));
        }
        if let Some(lang) = &self.relevance_language {
            pairs.push(("relevanceLanguage", lang.clone()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub total_results: i64,
    #[serde(default)]
    pub results_per_page: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListResponse {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub etag: String,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub page_info: PageInfo,
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub etag: String,
    pub id: SearchResultId,
}

/// With `type=video` every result carries a `videoId`; its absence is a malformed response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    #[serde(default)]
    pub kind: String,
    pub video_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListResponse {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub etag: String,
    #[serde(default)]
    pub page_info: PageInfo,
    #[serde(default)]
    pub items: Vec<Video>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub etag: String,
    pub id: String,
    #[serde(default)]
    pub snippet: VideoSnippet,
    #[serde(default)]
    pub statistics: VideoStatistics,
    #[serde(default)]
    pub content_details: ContentDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub channel_title: String,
}

/// Missing counts (e.g. likes disabled by the uploader) read as zero
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default, deserialize_with = "count")]
    pub view_count: u64,
    #[serde(default, deserialize_with = "count")]
    pub like_count: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetails {
    /// ISO 8601 duration such as `PT12M3S`
    #[serde(default)]
    pub duration: Option<String>,
}

/// Counts arrive as decimal strings; numbers and `null` are accepted too.
fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u64),
        Text(String),
    }

    match Option::<Count>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Count::Number(n)) => Ok(n),
        Some(Count::Text(text)) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid count {:?}", text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_pairs_skip_absent_hints() {
        let request = SearchRequest {
            query: "knapsack".to_string(),
            max_results: 25,
            region_code: None,
            relevance_language: Some("en".to_string()),
        };
        let pairs = request.query_pairs();

        assert!(pairs.contains(&("type", "video".to_string())));
        assert!(pairs.contains(&("maxResults", "25".to_string())));
        assert!(pairs.contains(&("order", "relevance".to_string())));
        assert!(pairs.contains(&("relevanceLanguage", "en".to_string())));
        assert!(pairs.iter().all(|(name, _)| *name != "regionCode"));
    }

    #[test]
    fn statistics_default_missing_likes_to_zero() {
        let video: Video = serde_json::from_str(
            r#"{"id": "a", "statistics": {"viewCount": "1500", "favoriteCount": "0"}}"#,
        )
        .unwrap();
        assert_eq!(video.statistics.view_count, 1500);
        assert_eq!(video.statistics.like_count, 0);
    }

    #[test]
    fn absent_blocks_fall_back_to_defaults() {
        let video: Video = serde_json::from_str(r#"{"id": "bare"}"#).unwrap();
        assert_eq!(video.snippet.title, "");
        assert_eq!(video.statistics, VideoStatistics::default());
        assert!(video.content_details.duration.is_none());
    }

    #[test]
    fn counts_accept_numbers_and_null() {
        let stats: VideoStatistics =
            serde_json::from_str(r#"{"viewCount": 42, "likeCount": null}"#).unwrap();
        assert_eq!(stats.view_count, 42);
        assert_eq!(stats.like_count, 0);
    }

    #[test]
    fn garbage_count_is_rejected() {
        let result = serde_json::from_str::<VideoStatistics>(r#"{"viewCount": "lots"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn unread_statistics_fields_cannot_fail_the_batch() {
        let response: VideoListResponse = serde_json::from_str(
            r#"{"items": [
                {"id": "a", "statistics": {"viewCount": "10", "likeCount": "2", "commentCount": "3"}},
                {"id": "b", "statistics": {"viewCount": "7", "commentCount": "disabled", "favoriteCount": null},
                 "contentDetails": {"duration": "PT5M", "definition": 42}}
            ]}"#,
        )
        .unwrap();

        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].statistics.like_count, 2);
        assert_eq!(response.items[1].statistics.view_count, 7);
        assert_eq!(response.items[1].content_details.duration.as_deref(), Some("PT5M"));
    }

    #[test]
    fn search_result_without_video_id_is_rejected() {
        let result = serde_json::from_str::<SearchListResponse>(
            r#"{"items": [{"id": {"kind": "youtube#channel", "channelId": "c"}}]}"#,
        );
        assert!(result.is_err());
    }
}
