use clap::Parser;
use finder::{DEFAULT_MAX_RESULTS, DEFAULT_MIN_DURATION_S, SearchOptions};

#[derive(Debug, Parser)]
#[command(name = "yt-top", about = "Find top YouTube videos for a topic.", version)]
pub struct Cli {
    /// Search topic, e.g. 'dynamic programming knapsack'
    pub topic: String,

    /// Max results to fetch (capped at 50)
    #[arg(long = "max", default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: u32,

    /// regionCode, e.g. US/IL/GB
    #[arg(long)]
    pub region: Option<String>,

    /// relevanceLanguage, e.g. en/he
    #[arg(long)]
    pub lang: Option<String>,

    /// Min duration in seconds (filters out very short videos)
    #[arg(long, default_value_t = DEFAULT_MIN_DURATION_S)]
    pub min_duration: u64,

    /// How many to display
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

impl Cli {
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            max_results: self.max_results,
            region_code: self.region.clone(),
            relevance_language: self.lang.clone(),
        }
    }
}
