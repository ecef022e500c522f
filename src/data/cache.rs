//! Process-wide reference data cache.
//!
//! The tables are static for the life of the process, so the first
//! successful load is memoized and never invalidated.

use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::config::ConfigLoader;
use crate::error::EngineResult;

use super::store::ReferenceData;

static SHARED: OnceLock<Arc<ReferenceData>> = OnceLock::new();

/// Returns the shared reference data, loading it on first use.
///
/// Only the first successful load is kept; later calls return it even if
/// they pass a different configuration. A failed load is not cached.
pub fn shared(config: &ConfigLoader) -> EngineResult<Arc<ReferenceData>> {
    if let Some(data) = SHARED.get() {
        debug!("Reusing cached reference data");
        return Ok(Arc::clone(data));
    }

    let data = Arc::new(ReferenceData::from_config(config)?);
    Ok(Arc::clone(SHARED.get_or_init(|| data)))
}
