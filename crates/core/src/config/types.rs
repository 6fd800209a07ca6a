use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Remote service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the Terminal API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://terminal.c1games.com/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Search tuning
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Worker tasks for brute-force searches. More workers pay off for
    /// algos uploaded long ago, deep in the id space.
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// Page limit for leaderboard scans.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
    /// Correction for ids the service burned without issuing publicly,
    /// added on top of the per-season algo counts.
    #[serde(default = "default_id_offset")]
    pub id_offset: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            max_pages: default_max_pages(),
            id_offset: default_id_offset(),
        }
    }
}

fn default_workers() -> usize {
    20
}

fn default_max_pages() -> u32 {
    104
}

fn default_id_offset() -> u64 {
    507
}
