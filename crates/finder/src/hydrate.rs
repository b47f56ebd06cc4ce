use domain::{VideoRecord, watch_url};
use tracing::{debug, warn};
use youtube_api::{Video, YouTubeApi};

use crate::duration::parse_iso8601_duration;
use crate::error::Result;

/// Enrich video IDs with snippet, statistics and duration in one batched call.
///
/// An empty ID list returns immediately without calling the API. IDs the API does
/// not return (deleted or private videos) are dropped.
pub async fn fetch_video_details(api: &dyn YouTubeApi, ids: &[String]) -> Result<Vec<VideoRecord>> {
    if ids.is_empty() {
        debug!("no video IDs to hydrate; skipping videos.list");
        return Ok(Vec::new());
    }

    let response = api.videos_list(ids).await?;
    let records: Vec<VideoRecord> = response.items.into_iter().map(to_record).collect();

    debug!(requested = ids.len(), hydrated = records.len(), "hydration complete");
    Ok(records)
}

/// Convert one `videos.list` item into a record.
///
/// An unparsable duration only affects this record: it becomes `None`.
pub fn to_record(video: Video) -> VideoRecord {
    let duration_s = match video.content_details.duration.as_deref() {
        None | Some("") => None,
        Some(raw) => {
            let parsed = parse_iso8601_duration(raw);
            if parsed.is_none() {
                warn!(id = %video.id, duration = raw, "ignoring unparsable duration");
            }
            parsed
        }
    };

    VideoRecord {
        url: watch_url(&video.id),
        id: video.id,
        title: video.snippet.title,
        channel: video.snippet.channel_title,
        published_at: video.snippet.published_at,
        views: video.statistics.view_count,
        likes: video.statistics.like_count,
        duration_s,
    }
}
