use domain::VideoRecord;
use std::cmp::Reverse;

/// Videos shorter than this are treated as shorts and dropped by default
pub const DEFAULT_MIN_DURATION_S: u64 = 60;

/// Filter out short videos, then order by views and likes, both descending.
///
/// A missing duration counts as zero. Ordering is two stable passes, likes
/// first and views second, so views decide, likes break view ties, and
/// records tied on both keep their input order.
pub fn rank_videos(videos: Vec<VideoRecord>, min_duration_s: u64) -> Vec<VideoRecord> {
    let mut ranked: Vec<VideoRecord> = videos
        .into_iter()
        .filter(|video| video.duration_s.unwrap_or(0) >= min_duration_s)
        .collect();

    ranked.sort_by_key(|video| Reverse(video.likes));
    ranked.sort_by_key(|video| Reverse(video.views));
    ranked
}
