use finder::FinderError;
use std::fmt;
use youtube_api::DEFAULT_BASE_URL;

pub const API_KEY_VAR: &str = "YT_API_KEY";
pub const BASE_URL_VAR: &str = "YT_API_BASE_URL";

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Load from the process environment, after reading a local `.env` file if present.
    pub fn from_env() -> Result<Self, FinderError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup. An empty key counts as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, FinderError> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                FinderError::Configuration(format!("Missing {} in your .env file", API_KEY_VAR))
            })?;

        let base_url = lookup(BASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Config { api_key, base_url })
    }
}
