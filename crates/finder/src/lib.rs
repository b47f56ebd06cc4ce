//! Topic search, hydration and ranking of YouTube videos.
//!
//! The pipeline is strictly sequential:
//!
//! 1. [`search_video_ids`] issues one `search.list` call for candidate IDs.
//! 2. [`fetch_video_details`] hydrates them with one batched `videos.list` call.
//! 3. [`rank_videos`] drops short videos and orders the rest by views, then likes.
//!
//! [`render_table`] formats the result for the terminal.

mod duration;
mod error;
mod hydrate;
mod rank;
mod search;
mod table;

pub use duration::parse_iso8601_duration;
pub use error::{FinderError, Result};
pub use hydrate::{fetch_video_details, to_record};
pub use rank::{DEFAULT_MIN_DURATION_S, rank_videos};
pub use search::{DEFAULT_MAX_RESULTS, MAX_RESULTS_PER_PAGE, SearchOptions, search_video_ids};
pub use table::{HEADERS, format_duration, render_table};

use domain::VideoRecord;
use tracing::info;
use youtube_api::YouTubeApi;

/// Run search, hydration and ranking for a topic.
///
/// The first failing stage aborts the run; nothing partial is returned.
pub async fn find_top_videos(
    api: &dyn YouTubeApi,
    topic: &str,
    options: &SearchOptions,
    min_duration_s: u64,
) -> Result<Vec<VideoRecord>> {
    let ids = search_video_ids(api, topic, options).await?;
    let videos = fetch_video_details(api, &ids).await?;
    let hydrated = videos.len();
    let ranked = rank_videos(videos, min_duration_s);

    info!(
        topic,
        candidates = ids.len(),
        hydrated,
        ranked = ranked.len(),
        "ranked videos"
    );
    Ok(ranked)
}
