//! In-memory reference data store.
//!
//! Holds both tables sorted by display name, with identifier indexes for
//! lookups. The store is immutable once built.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{HealthSystem, Hospital, Organization, OrganizationKind};

use super::loader::{load_health_systems, load_hospitals};

/// Both reference tables, sorted by name and indexed by identifier.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    health_systems: Vec<HealthSystem>,
    hospitals: Vec<Hospital>,
    health_system_index: HashMap<String, usize>,
    hospital_index: HashMap<String, usize>,
}

impl ReferenceData {
    /// Loads both tables from CSV files.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        health_systems_path: P,
        hospitals_path: Q,
    ) -> EngineResult<Self> {
        let health_systems = load_health_systems(health_systems_path.as_ref())?;
        let hospitals = load_hospitals(hospitals_path.as_ref())?;
        Self::from_records(health_systems, hospitals)
    }

    /// Loads both tables from the paths named in the configuration.
    pub fn from_config(config: &ConfigLoader) -> EngineResult<Self> {
        Self::load(config.health_systems_path(), config.hospitals_path())
    }

    /// Builds the store from already-parsed records.
    ///
    /// Fails with [`EngineError::DuplicateOrganization`] if two rows of the
    /// same table share an identifier.
    pub fn from_records(
        mut health_systems: Vec<HealthSystem>,
        mut hospitals: Vec<Hospital>,
    ) -> EngineResult<Self> {
        health_systems.sort_by(|a, b| a.name.cmp(&b.name));
        hospitals.sort_by(|a, b| a.name.cmp(&b.name));

        let health_system_index = build_index(
            OrganizationKind::HealthSystem,
            health_systems.iter().map(|hs| hs.id.as_str()),
        )?;
        let hospital_index = build_index(
            OrganizationKind::Hospital,
            hospitals.iter().map(|h| h.ccn.as_str()),
        )?;

        Ok(Self {
            health_systems,
            hospitals,
            health_system_index,
            hospital_index,
        })
    }

    /// Returns every health system, sorted by name.
    pub fn health_systems(&self) -> &[HealthSystem] {
        &self.health_systems
    }

    /// Returns every hospital, sorted by name.
    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    /// Looks up a health system by its identifier.
    pub fn health_system(&self, id: &str) -> EngineResult<&HealthSystem> {
        self.health_system_index
            .get(id)
            .map(|&i| &self.health_systems[i])
            .ok_or_else(|| EngineError::OrganizationNotFound {
                kind: OrganizationKind::HealthSystem,
                id: id.to_string(),
            })
    }

    /// Looks up a hospital by its CCN.
    pub fn hospital(&self, ccn: &str) -> EngineResult<&Hospital> {
        self.hospital_index
            .get(ccn)
            .map(|&i| &self.hospitals[i])
            .ok_or_else(|| EngineError::OrganizationNotFound {
                kind: OrganizationKind::Hospital,
                id: ccn.to_string(),
            })
    }

    /// Looks up an organization of either kind.
    pub fn organization(&self, kind: OrganizationKind, id: &str) -> EngineResult<Organization> {
        match kind {
            OrganizationKind::HealthSystem => self.health_system(id).cloned().map(Into::into),
            OrganizationKind::Hospital => self.hospital(id).cloned().map(Into::into),
        }
    }

    /// Returns the distinct hospital states, sorted.
    pub fn hospital_states(&self) -> Vec<&str> {
        self.hospitals
            .iter()
            .map(|h| h.state.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Returns the hospitals located in `state`, sorted by name.
    pub fn hospitals_in_state(&self, state: &str) -> Vec<&Hospital> {
        self.hospitals.iter().filter(|h| h.state == state).collect()
    }
}

fn build_index<'a>(
    kind: OrganizationKind,
    ids: impl Iterator<Item = &'a str>,
) -> EngineResult<HashMap<String, usize>> {
    let mut index = HashMap::new();
    for (position, id) in ids.enumerate() {
        if index.insert(id.to_string(), position).is_some() {
            return Err(EngineError::DuplicateOrganization {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(index)
}
