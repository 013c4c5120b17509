//! # Data Source Module
//!
//! Boundary towards the service holding the sheets. A source maps a data set id to
//! its sheets; transport, authentication and quotas are the source's business.
use crate::spreadsheet::SheetData;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

pub(crate) mod retry;

/// Errors reported by a data source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Failure worth retrying after a pause (quota exceeded, timeout).
    #[error("Failed to load data set '{id}': {source}")]
    Transient { id: String, source: anyhow::Error },

    /// Failure that will not go away by retrying.
    #[error("Failed to retrieve data set '{id}': {source}")]
    Fatal { id: String, source: anyhow::Error },
}

impl SourceError {
    /// Returns true if the failed request may succeed when repeated.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient { .. })
    }
}

/// Provider of sheets, keyed by data set id.
pub trait TabularDataSource {
    /// Loads all sheets of a data set in source order.
    fn fetch(&mut self, id: &str) -> Result<SheetData, SourceError>;

    /// Re-establishes the connection before a retry, e.g. by re-authorizing.
    fn refresh(&mut self) -> Result<(), SourceError> {
        Ok(())
    }
}

/// Data sets held in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    data_sets: HashMap<String, SheetData>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a data set.
    pub fn insert(&mut self, id: &str, data: SheetData) -> &mut Self {
        self.data_sets.insert(id.to_owned(), data);
        self
    }
}

impl TabularDataSource for MemorySource {
    fn fetch(&mut self, id: &str) -> Result<SheetData, SourceError> {
        debug!("Getting sheets data for '{id}'.");
        self.data_sets.get(id).cloned().ok_or_else(|| SourceError::Fatal {
            id: id.to_owned(),
            source: anyhow::anyhow!("unknown data set"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_source_returns_copy() {
        let mut data = SheetData::new();
        data.insert("Run1".to_owned(), vec![vec![], vec![], vec![]]);
        let mut source = MemorySource::new();
        source.insert("doc", data.clone());
        assert_eq!(source.fetch("doc").unwrap(), data);
        assert_eq!(source.fetch("doc").unwrap(), data);
    }

    #[test]
    fn memory_source_unknown_id() {
        let error = MemorySource::new().fetch("missing").unwrap_err();
        assert!(!error.is_transient());
        assert_eq!(error.to_string(), "Failed to retrieve data set 'missing': unknown data set");
    }
}
