use serde::{Deserialize, Serialize};

use super::domain::{Application, SelectionRecord};

/// Read-only boundary to whatever persists applications and selections.
///
/// Implementations hand back selection records already resolved against the
/// applications they reference; the join is the persistence side's concern.
pub trait SelectionStore: Send + Sync {
    fn all_applications(&self) -> Result<Vec<Application>, StoreError>;
    fn all_selection_records(&self) -> Result<Vec<SelectionRecord>, StoreError>;
}

/// Error enumeration for fetch failures. An empty collection is a legitimate
/// result and is never reported through this type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("selection store unavailable: {0}")]
    Unavailable(String),
    #[error("selection store query failed")]
    Query(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Owned snapshot of the two input collections.
///
/// Doubles as the simplest [`SelectionStore`]: imports, demos, and tests work
/// with a dataset directly instead of standing up real persistence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionDataset {
    pub applications: Vec<Application>,
    pub selection_records: Vec<SelectionRecord>,
}

impl SelectionStore for SelectionDataset {
    fn all_applications(&self) -> Result<Vec<Application>, StoreError> {
        Ok(self.applications.clone())
    }

    fn all_selection_records(&self) -> Result<Vec<SelectionRecord>, StoreError> {
        Ok(self.selection_records.clone())
    }
}
