//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the wizard
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CriteriaError, CriteriaResult};

use super::types::WizardConfig;

/// Loads and provides access to the wizard configuration.
///
/// # Directory Structure
///
/// ```text
/// config/worktime/
/// └── wizard.yaml   # Fallback subtitle and initial draft values
/// ```
///
/// # Example
///
/// ```no_run
/// use worktime_criteria::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/worktime")?;
/// println!("Fallback subtitle: {}", loader.config().fallback_subtitle);
/// # Ok::<(), worktime_criteria::error::CriteriaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: WizardConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::ConfigNotFound`] if `wizard.yaml` is missing
    /// and [`CriteriaError::ConfigParseError`] if it is not valid YAML for a
    /// [`WizardConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> CriteriaResult<Self> {
        let wizard_path = path.as_ref().join("wizard.yaml");
        let config = Self::load_yaml::<WizardConfig>(&wizard_path)?;

        debug!(path = %wizard_path.display(), "Loaded wizard configuration");
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> CriteriaResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CriteriaError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| CriteriaError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> WizardConfig {
        self.config
    }
}

impl From<WizardConfig> for ConfigLoader {
    fn from(config: WizardConfig) -> Self {
        Self { config }
    }
}
