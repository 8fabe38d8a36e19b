//! Application state for the criteria API.

use std::sync::Arc;

use crate::config::{ConfigLoader, WizardConfig};
use crate::registry::{CriteriaRegistry, InMemoryRegistry};

/// Shared application state.
///
/// Holds the wizard configuration and the registry every handler reads
/// from and appends to.
#[derive(Clone)]
pub struct AppState {
    config: Arc<WizardConfig>,
    registry: Arc<dyn CriteriaRegistry>,
}

impl AppState {
    /// Creates a state backed by an empty in-memory registry.
    pub fn new(loader: ConfigLoader) -> Self {
        Self::with_registry(loader, Arc::new(InMemoryRegistry::new()))
    }

    /// Creates a state backed by the given registry.
    pub fn with_registry(loader: ConfigLoader, registry: Arc<dyn CriteriaRegistry>) -> Self {
        Self {
            config: Arc::new(loader.into_config()),
            registry,
        }
    }

    /// Returns a shared handle to the wizard configuration.
    pub fn config(&self) -> Arc<WizardConfig> {
        Arc::clone(&self.config)
    }

    /// Returns the registry.
    pub fn registry(&self) -> &dyn CriteriaRegistry {
        self.registry.as_ref()
    }
}
