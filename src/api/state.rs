//! Application state for the Staffing Savings Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, NotesConfig};
use crate::data::ReferenceData;
use crate::error::EngineResult;

/// Shared application state.
///
/// Contains the immutable reference tables and the note wording. Cloning
/// is cheap; every clone points at the same tables.
#[derive(Clone)]
pub struct AppState {
    data: Arc<ReferenceData>,
    notes: Arc<NotesConfig>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(data: Arc<ReferenceData>, notes: NotesConfig) -> Self {
        Self {
            data,
            notes: Arc::new(notes),
        }
    }

    /// Builds the state from a loaded configuration, reusing the
    /// process-wide reference data cache.
    pub fn from_config(config: &ConfigLoader) -> EngineResult<Self> {
        let data = crate::data::shared(config)?;
        Ok(Self::new(data, config.notes().clone()))
    }

    /// Returns the reference tables.
    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    /// Returns the note wording.
    pub fn notes(&self) -> &NotesConfig {
        &self.notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_from_config_loads_tables() {
        let config = ConfigLoader::load("./config").unwrap();
        let state = AppState::from_config(&config).unwrap();

        assert_eq!(state.data().health_systems().len(), 3);
        assert_eq!(state.notes().rn_mix_percent, 80);
    }
}
