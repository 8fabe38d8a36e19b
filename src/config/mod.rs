//! Configuration loading and management for the criteria wizard.
//!
//! This module loads the wizard configuration from a YAML file: the fallback
//! subtitle for undescribed criteria and the initial draft values.
//!
//! # Example
//!
//! ```no_run
//! use worktime_criteria::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/worktime").unwrap();
//! println!("Default unit: {:?}", config.config().draft.unit);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_FALLBACK_SUBTITLE, DraftDefaults, WizardConfig};
