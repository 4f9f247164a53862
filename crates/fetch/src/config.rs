use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::pacing::FixedDelay;

pub const DEFAULT_ENDPOINT: &str = "https://www.wikidata.org/w/api.php";
pub const DEFAULT_USER_AGENT: &str = "WikidataDataFetcher/1.0 (Rust)";
pub const DEFAULT_CHUNK_SIZE: usize = 50;
pub const DEFAULT_PAUSE_MS: u64 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FetchConfig {
    pub endpoint: String,
    pub user_agent: String,
    pub chunk_size: usize,
    /// Pause between chunk requests
    pub pause_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            pause_ms: DEFAULT_PAUSE_MS,
        }
    }
}

impl FetchConfig {
    pub fn pacer(&self) -> FixedDelay {
        FixedDelay(Duration::from_millis(self.pause_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.endpoint, "https://www.wikidata.org/w/api.php");
        assert_eq!(config.chunk_size, 50);
        assert_eq!(config.pacer().0, Duration::from_secs(1));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: FetchConfig = serde_json::from_str(r#"{"chunk_size": 10}"#).unwrap();
        assert_eq!(config.chunk_size, 10);
        assert_eq!(config.pause_ms, 1000);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }
}
