use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::SignalboardError;
use crate::types::{Country, Exchange};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub default_country: Country,
    pub default_exchange: Exchange,
    /// Rows of the raw data table kept for display
    pub preview_rows: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_country: Country::India,
            default_exchange: Exchange::Nse,
            preview_rows: 500,
        }
    }
}

impl ConfigSection for DisplayConfig {
    fn section_name() -> &'static str {
        "display"
    }

    fn validate(&self) -> Result<(), SignalboardError> {
        if !self.default_country.exchanges().contains(&self.default_exchange) {
            return Err(SignalboardError::Configuration(format!(
                "Exchange {} is not listed for {}",
                self.default_exchange.label(),
                self.default_country.label()
            )));
        }
        if self.preview_rows == 0 {
            return Err(SignalboardError::Configuration(
                "Preview rows must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Display".to_string(),
            fields: vec![FieldManifest {
                name: "preview_rows".to_string(),
                field_type: "integer".to_string(),
                default: serde_json::json!(500),
                min: Some(1.0),
                max: Some(100_000.0),
                description: "Rows of raw data shown in the table".to_string(),
            }],
        }
    }
}
