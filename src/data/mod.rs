//! Reference data for the Staffing Savings Engine.
//!
//! This module loads the health-system and hospital tables from CSV,
//! validates them into typed records, and serves lookups over them.
//!
//! # Example
//!
//! ```no_run
//! use savings_engine::data::ReferenceData;
//!
//! let data = ReferenceData::load("./config/health_system.csv", "./config/all_hospitals.csv")?;
//! for state in data.hospital_states() {
//!     println!("{}: {} hospitals", state, data.hospitals_in_state(state).len());
//! }
//! # Ok::<(), savings_engine::error::EngineError>(())
//! ```

mod cache;
mod loader;
mod store;

pub use cache::shared;
pub use loader::{FORMULA_FLAG_COLUMN, load_health_systems, load_hospitals, parse_decimal, parse_flag};
pub use store::ReferenceData;
