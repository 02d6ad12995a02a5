use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::SignalboardError;
use serde::{Deserialize, Serialize};

pub const MAX_WINDOW: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    pub short_window: usize,
    pub long_window: usize,
    pub warmup_policy: WarmupPolicy,
}

/// How rows without both averages are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WarmupPolicy {
    /// Warm-up rows are `Sell` (-1); any row without `short > long` is a sell.
    #[default]
    SellDefault,
    /// Warm-up rows are `Undefined` (0).
    Explicit,
}

impl WarmupPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SellDefault => "Sell during warm-up",
            Self::Explicit => "Undefined during warm-up",
        }
    }
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            short_window: 10,
            long_window: 50,
            warmup_policy: WarmupPolicy::SellDefault,
        }
    }
}

impl SignalConfig {
    pub fn new(short_window: usize, long_window: usize) -> Self {
        Self {
            short_window,
            long_window,
            ..Default::default()
        }
    }

    pub fn with_warmup_policy(mut self, policy: WarmupPolicy) -> Self {
        self.warmup_policy = policy;
        self
    }

    /// `short_window < long_window` is expected but not required.
    pub fn is_ordered(&self) -> bool {
        self.short_window < self.long_window
    }
}

impl ConfigSection for SignalConfig {
    fn section_name() -> &'static str {
        "signal"
    }

    fn validate(&self) -> Result<(), SignalboardError> {
        if self.short_window == 0 || self.long_window == 0 {
            return Err(SignalboardError::Configuration(
                "Moving average windows must be positive".to_string(),
            ));
        }
        if self.short_window > MAX_WINDOW || self.long_window > MAX_WINDOW {
            return Err(SignalboardError::Configuration(format!(
                "Moving average windows must not exceed {}",
                MAX_WINDOW
            )));
        }
        if !self.is_ordered() {
            log::warn!(
                "short_window ({}) >= long_window ({}); crossover signal will not be meaningful",
                self.short_window,
                self.long_window
            );
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Signal".to_string(),
            fields: vec![
                FieldManifest {
                    name: "short_window".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(10),
                    min: Some(1.0),
                    max: Some(MAX_WINDOW as f64),
                    description: "Rows in the fast moving average".to_string(),
                },
                FieldManifest {
                    name: "long_window".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(50),
                    min: Some(1.0),
                    max: Some(MAX_WINDOW as f64),
                    description: "Rows in the slow moving average".to_string(),
                },
                FieldManifest {
                    name: "warmup_policy".to_string(),
                    field_type: "enum".to_string(),
                    default: serde_json::json!("SellDefault"),
                    min: None,
                    max: None,
                    description: "Signal for rows before both averages exist".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SignalConfig::default();
        assert_eq!(config.short_window, 10);
        assert_eq!(config.long_window, 50);
        assert_eq!(config.warmup_policy, WarmupPolicy::SellDefault);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_window_rejected() {
        assert!(SignalConfig::new(0, 50).validate().is_err());
        assert!(SignalConfig::new(10, 0).validate().is_err());
    }

    #[test]
    fn test_unordered_windows_allowed() {
        let config = SignalConfig::new(50, 10);
        assert!(!config.is_ordered());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_manifest_ranges() {
        let manifest = SignalConfig::default().to_manifest();
        assert_eq!(manifest.int_range("short_window", (0, 0)), (1, MAX_WINDOW));
        assert_eq!(manifest.int_range("missing", (2, 3)), (2, 3));
    }
}
