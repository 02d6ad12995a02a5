use crate::error::SignalboardError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), SignalboardError>;
    fn to_manifest(&self) -> ConfigManifest;
}

/// Configuration manifest for UI generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigManifest {
    pub section: String,
    pub fields: Vec<FieldManifest>,
}

impl ConfigManifest {
    pub fn field(&self, name: &str) -> Option<&FieldManifest> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Inclusive integer bounds of a field, falling back to `default` when
    /// the manifest does not bound it.
    pub fn int_range(&self, name: &str, default: (usize, usize)) -> (usize, usize) {
        match self.field(name) {
            Some(field) => (
                field.min.map(|v| v as usize).unwrap_or(default.0),
                field.max.map(|v| v as usize).unwrap_or(default.1),
            ),
            None => default,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldManifest {
    pub name: String,
    pub field_type: String,
    pub default: serde_json::Value,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub description: String,
}
