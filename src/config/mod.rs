//! Configuration loading and management for the Staffing Savings Engine.
//!
//! This module loads `calculator.yaml`, which names the reference tables,
//! the server bind address and the wording of the calculation notes.
//!
//! # Example
//!
//! ```no_run
//! use savings_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Serving on {}", config.server().bind_address);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{CalculatorConfig, DatasetConfig, NotesConfig, ServerConfig};
