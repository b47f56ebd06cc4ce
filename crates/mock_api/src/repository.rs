use std::sync::{Arc, RwLock};

/// A video as the mock API stores it
///
/// Counts and duration are optional so fixtures can model videos with hidden
/// likes or missing content details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredVideo {
    pub id: String,
    pub channel_id: String,
    pub title: String,
    pub description: String,
    pub channel_title: String,
    pub published_at: String,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    /// Raw ISO 8601 duration, served verbatim
    pub duration: Option<String>,
}

impl StoredVideo {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            channel_id: format!("channel-{}", id),
            id,
            title: title.into(),
            description: String::new(),
            channel_title: "Mock Channel".to_string(),
            published_at: "2023-01-01T00:00:00Z".to_string(),
            view_count: None,
            like_count: None,
            duration: None,
        }
    }

    pub fn channel(mut self, channel_title: impl Into<String>) -> Self {
        self.channel_title = channel_title.into();
        self
    }

    pub fn views(mut self, views: u64) -> Self {
        self.view_count = Some(views);
        self
    }

    pub fn likes(mut self, likes: u64) -> Self {
        self.like_count = Some(likes);
        self
    }

    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }
}

/// Repository trait for fixture access
pub trait Repository: Send + Sync {
    /// Get a video by ID
    fn get_video(&self, id: &str) -> Option<StoredVideo>;

    /// Get all videos in insertion order
    fn get_videos(&self) -> Vec<StoredVideo>;

    /// Add a video, replacing any stored video with the same ID
    fn add_video(&self, video: StoredVideo);
}

/// In-memory implementation of the Repository trait
#[derive(Default)]
pub struct InMemoryRepository {
    videos: Arc<RwLock<Vec<StoredVideo>>>,
}

impl InMemoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding the given videos
    pub fn with_videos(videos: impl IntoIterator<Item = StoredVideo>) -> Self {
        let repo = Self::new();
        for video in videos {
            repo.add_video(video);
        }
        repo
    }

    /// Create a repository with a small programming-tutorial catalogue
    pub fn with_sample_data() -> Self {
        Self::with_videos([
            StoredVideo::new("knap-1", "Dynamic Programming Knapsack Explained")
                .channel("Algo Academy")
                .views(120_000)
                .likes(4_100)
                .duration("PT14M5S"),
            StoredVideo::new("knap-2", "0/1 Knapsack in 60 seconds #shorts")
                .channel("Code Shorts")
                .views(900_000)
                .likes(30_000)
                .duration("PT58S"),
            StoredVideo::new("knap-3", "Knapsack Problem - Dynamic Programming Lecture")
                .channel("University Lectures")
                .views(120_000)
                .likes(5_200)
                .duration("PT1H2M"),
            StoredVideo::new("knap-4", "Dynamic programming: the knapsack pattern")
                .channel("Hidden Likes")
                .views(45_000)
                .duration("PT9M30S"),
            StoredVideo::new("graph-1", "Dijkstra's Algorithm in 10 minutes")
                .channel("Algo Academy")
                .views(300_000)
                .likes(9_000)
                .duration("PT10M"),
        ])
    }
}

impl Repository for InMemoryRepository {
    fn get_video(&self, id: &str) -> Option<StoredVideo> {
        self.videos
            .read()
            .expect("Failed to acquire read lock on videos")
            .iter()
            .find(|video| video.id == id)
            .cloned()
    }

    fn get_videos(&self) -> Vec<StoredVideo> {
        self.videos
            .read()
            .expect("Failed to acquire read lock on videos")
            .clone()
    }

    fn add_video(&self, video: StoredVideo) {
        let mut videos = self
            .videos
            .write()
            .expect("Failed to acquire write lock on videos");
        match videos.iter_mut().find(|stored| stored.id == video.id) {
            Some(stored) => *stored = video,
            None => videos.push(video),
        }
    }
}
