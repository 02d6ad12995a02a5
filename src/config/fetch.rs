use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::SignalboardError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const YAHOO_CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// `None` keeps cached fetches until invalidated.
    pub cache_ttl_secs: Option<u64>,
    pub cache_capacity: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: YAHOO_CHART_URL.to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 30,
            cache_ttl_secs: Some(3600),
            cache_capacity: 32,
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Option<Duration> {
        self.cache_ttl_secs.map(Duration::from_secs)
    }
}

impl ConfigSection for FetchConfig {
    fn section_name() -> &'static str {
        "fetch"
    }

    fn validate(&self) -> Result<(), SignalboardError> {
        if self.base_url.trim().is_empty() {
            return Err(SignalboardError::Configuration(
                "Fetch base URL must not be empty".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(SignalboardError::Configuration(
                "Fetch timeout must be positive".to_string(),
            ));
        }
        if self.cache_capacity == 0 {
            return Err(SignalboardError::Configuration(
                "Cache capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Fetch".to_string(),
            fields: vec![
                FieldManifest {
                    name: "timeout_secs".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(30),
                    min: Some(1.0),
                    max: Some(600.0),
                    description: "HTTP timeout for market data requests".to_string(),
                },
                FieldManifest {
                    name: "cache_ttl_secs".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(3600),
                    min: Some(0.0),
                    max: None,
                    description: "Seconds a fetched series stays cached".to_string(),
                },
                FieldManifest {
                    name: "cache_capacity".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(32),
                    min: Some(1.0),
                    max: Some(1024.0),
                    description: "Maximum cached fetches".to_string(),
                },
            ],
        }
    }
}
