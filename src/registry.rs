//! Storage for committed criteria records.
//!
//! The wizard only ever appends. Listing and lookup serve whatever screen
//! displays the criteria.

use std::sync::{PoisonError, RwLock};

use serde::Deserialize;
use tracing::info;

use crate::error::{CriteriaError, CriteriaResult};
use crate::models::{Classification, CriteriaId, CriteriaRecord};

/// Filter applied when listing criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CriteriaFilter {
    /// Only records with this classification.
    #[serde(default)]
    pub category: Option<Classification>,
    /// Only active records.
    #[serde(default)]
    pub active_only: bool,
    /// Case-insensitive substring of `title + " " + subtitle`.
    #[serde(default, rename = "q")]
    pub text: Option<String>,
}

impl CriteriaFilter {
    /// Returns true if the record passes every filter criterion.
    pub fn matches(&self, record: &CriteriaRecord) -> bool {
        let category_ok = self
            .category
            .is_none_or(|category| record.classification == category);
        let active_ok = !self.active_only || record.active;
        let text_ok = match self.text.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => format!("{} {}", record.title, record.subtitle)
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        };
        category_ok && active_ok && text_ok
    }
}

/// Registry of committed criteria.
///
/// Implementations must make `append` atomic with respect to `list` and
/// `get_by_id`: a reader never observes a partially written record.
pub trait CriteriaRegistry: Send + Sync {
    /// Adds a record. The newest record is listed first.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::DuplicateCriteriaId`] if the id is taken.
    fn append(&self, record: CriteriaRecord) -> CriteriaResult<()>;

    /// Looks up a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::CriteriaNotFound`] if no record has the id.
    fn get_by_id(&self, id: &CriteriaId) -> CriteriaResult<CriteriaRecord>;

    /// Lists matching records, active before inactive, otherwise in
    /// registry order.
    fn list(&self, filter: &CriteriaFilter) -> Vec<CriteriaRecord>;
}

/// An in-memory registry guarded by a read-write lock.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    records: RwLock<Vec<CriteriaRecord>>,
}

impl InMemoryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CriteriaRegistry for InMemoryRegistry {
    fn append(&self, record: CriteriaRecord) -> CriteriaResult<()> {
        let mut records = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if records.iter().any(|existing| existing.id == record.id) {
            return Err(CriteriaError::DuplicateCriteriaId {
                id: record.id.to_string(),
            });
        }

        info!(criteria_id = %record.id, total = records.len() + 1, "Criteria registered");
        records.insert(0, record);
        Ok(())
    }

    fn get_by_id(&self, id: &CriteriaId) -> CriteriaResult<CriteriaRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|record| &record.id == id)
            .cloned()
            .ok_or_else(|| CriteriaError::CriteriaNotFound { id: id.to_string() })
    }

    fn list(&self, filter: &CriteriaFilter) -> Vec<CriteriaRecord> {
        let mut matching: Vec<CriteriaRecord> = self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();

        // sort_by_key is stable
        matching.sort_by_key(|record| !record.active);
        matching
    }
}
