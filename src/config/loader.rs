//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! calculator configuration from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{CalculatorConfig, NotesConfig, ServerConfig};

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "calculator.yaml";

/// Loads and provides access to the calculator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── calculator.yaml     # Dataset paths, server and note settings
/// ├── health_system.csv   # Health-system reference table
/// └── all_hospitals.csv   # Hospital reference table
/// ```
///
/// # Example
///
/// ```no_run
/// use savings_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Hospitals table: {}", loader.hospitals_path().display());
/// # Ok::<(), savings_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    base_dir: PathBuf,
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if
    /// `calculator.yaml` is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let base_dir = path.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE_NAME);
        let config = Self::load_yaml::<CalculatorConfig>(&config_path)?;

        debug!(
            path = %config_path.display(),
            health_systems = %config.datasets.health_systems,
            hospitals = %config.datasets.hospitals,
            "Loaded calculator configuration"
        );

        Ok(Self { base_dir, config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the directory the configuration was loaded from.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Returns the resolved path of the health-system table.
    pub fn health_systems_path(&self) -> PathBuf {
        self.resolve(&self.config.datasets.health_systems)
    }

    /// Returns the resolved path of the hospital table.
    pub fn hospitals_path(&self) -> PathBuf {
        self.resolve(&self.config.datasets.hospitals)
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the note wording.
    pub fn notes(&self) -> &NotesConfig {
        &self.config.notes
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}
