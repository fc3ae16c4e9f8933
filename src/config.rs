//! Configuration management for ndint

use lazy_static::lazy_static;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use crate::error::{NdArrayError, NdResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`
    pub level: String,
    pub ansi: bool,
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
            with_target: true,
        }
    }
}

impl LoggingConfig {
    pub fn max_level(&self) -> NdResult<tracing::Level> {
        self.level
            .parse::<tracing::Level>()
            .map_err(|e| NdArrayError::configuration("logging.level", e))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Elements printed by `Display` before the rest is elided
    pub max_elements: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { max_elements: 1000 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NdConfig {
    pub logging: LoggingConfig,
    pub display: DisplayConfig,
}

/// Holds the active configuration and the file it is persisted to, if any
#[derive(Debug, Default)]
pub struct ConfigManager {
    config: NdConfig,
    config_file: Option<PathBuf>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_file(mut self, path: PathBuf) -> Self {
        self.config_file = Some(path);
        self
    }

    pub fn load_from_file(&mut self, path: &Path) -> NdResult<()> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| NdArrayError::configuration("read config file", e))?;

        let config: NdConfig = serde_json::from_str(&content)
            .map_err(|e| NdArrayError::configuration("parse config file", e))?;
        config.logging.max_level()?;

        self.config = config;
        self.config_file = Some(path.to_path_buf());

        tracing::info!("Configuration loaded from {:?}", path);
        Ok(())
    }

    pub fn save_to_file(&self, path: &Path) -> NdResult<()> {
        let content = serde_json::to_string_pretty(&self.config)?;
        std::fs::write(path, content)?;

        tracing::info!("Configuration saved to {:?}", path);
        Ok(())
    }

    pub fn get_config(&self) -> NdConfig {
        self.config.clone()
    }

    /// Apply `f` and persist to the backing file when one is set
    pub fn update_config<F>(&mut self, f: F) -> NdResult<()>
    where
        F: FnOnce(&mut NdConfig),
    {
        f(&mut self.config);

        if let Some(ref path) = self.config_file {
            self.save_to_file(path)?;
        }
        Ok(())
    }
}

lazy_static! {
    static ref CONFIG_MANAGER: Arc<RwLock<ConfigManager>> = Arc::new(RwLock::new(ConfigManager::new()));
}

/// Get the global configuration
pub fn get_config() -> NdConfig {
    CONFIG_MANAGER.read().get_config()
}

/// Update the global configuration
pub fn update_config<F>(f: F) -> NdResult<()>
where
    F: FnOnce(&mut NdConfig),
{
    CONFIG_MANAGER.write().update_config(f)
}

/// Load the global configuration from a JSON file
pub fn load_config_from_file(path: &Path) -> NdResult<()> {
    CONFIG_MANAGER.write().load_from_file(path)
}

pub struct ConfigBuilder {
    config: NdConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: NdConfig::default(),
        }
    }

    pub fn logging(mut self, f: impl FnOnce(&mut LoggingConfig)) -> Self {
        f(&mut self.config.logging);
        self
    }

    pub fn display(mut self, f: impl FnOnce(&mut DisplayConfig)) -> Self {
        f(&mut self.config.display);
        self
    }

    pub fn build(self) -> NdConfig {
        self.config
    }

    /// Replace the global configuration
    pub fn apply(self) -> NdResult<()> {
        update_config(|config| *config = self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
