//! Configuration types for the savings calculator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `calculator.yaml`.

use serde::Deserialize;

/// Locations of the two reference tables.
///
/// Relative paths are resolved against the configuration directory.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Path to the health-system CSV table.
    pub health_systems: String,
    /// Path to the hospital CSV table.
    pub hospitals: String,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the API listens on, e.g. `127.0.0.1:8080`.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

/// Wording of the data and calculation notes.
#[derive(Debug, Clone, Deserialize)]
pub struct NotesConfig {
    /// Where the rate and staffing figures come from.
    #[serde(default = "default_data_source")]
    pub data_source: String,
    /// RN share assumed when converting agency FTEs.
    #[serde(default = "default_rn_mix_percent")]
    pub rn_mix_percent: u32,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            data_source: default_data_source(),
            rn_mix_percent: default_rn_mix_percent(),
        }
    }
}

fn default_data_source() -> String {
    "HCRIS FY2024".to_string()
}

fn default_rn_mix_percent() -> u32 {
    80
}

/// The complete calculator configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorConfig {
    /// Reference table locations.
    pub datasets: DatasetConfig,
    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Note wording.
    #[serde(default)]
    pub notes: NotesConfig,
}
