use super::{
    display::DisplayConfig, fetch::FetchConfig, signal::SignalConfig, traits::ConfigSection,
};
use crate::error::SignalboardError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

pub const DEFAULT_CONFIG_FILE: &str = "signalboard.toml";
pub const ENV_PREFIX: &str = "SIGNALBOARD";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub signal: SignalConfig,
    pub fetch: FetchConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), SignalboardError> {
        self.signal.validate()?;
        self.fetch.validate()?;
        self.display.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SignalboardError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SignalboardError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| SignalboardError::Configuration(format!("Failed to parse config: {}", e)))?;

        self.replace(config)
    }

    /// Load an optional TOML file overlaid with `SIGNALBOARD__SECTION__KEY`
    /// environment variables.
    pub fn load_layered<P: AsRef<Path>>(&self, path: P) -> Result<(), SignalboardError> {
        self.load_layered_with_prefix(path, ENV_PREFIX)
    }

    pub fn load_layered_with_prefix<P: AsRef<Path>>(
        &self,
        path: P,
        env_prefix: &str,
    ) -> Result<(), SignalboardError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix(env_prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| SignalboardError::Configuration(format!("Failed to load config: {}", e)))?;

        let config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| SignalboardError::Configuration(format!("Failed to parse config: {}", e)))?;

        self.replace(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SignalboardError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| SignalboardError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| SignalboardError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        match self.config.read() {
            Ok(config) => config.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn update<F>(&self, f: F) -> Result<(), SignalboardError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.get();
        f(&mut candidate);
        self.replace(candidate)
    }

    fn replace(&self, config: AppConfig) -> Result<(), SignalboardError> {
        config.validate()?;
        let mut guard = self
            .config
            .write()
            .map_err(|_| SignalboardError::Configuration("Config lock poisoned".to_string()))?;
        *guard = config;
        Ok(())
    }
}
