//! Immutable record store.
//!
//! One [`Dataset`] is created at startup and shared read-only for the rest of
//! the process. Nothing mutates it after load, so concurrent readers need no
//! synchronization.

use std::collections::BTreeSet;
use std::path::Path;

use crate::dataset::loader::{load_records, LoadError};
use crate::dataset::record::ViewRecord;

/// The fully-loaded access log.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<ViewRecord>,
}

impl Dataset {
    /// Load the access log at `path`. Fails on the first malformed row.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let records = load_records(path.as_ref())?;
        Ok(Self { records })
    }

    /// Build a dataset from already-parsed records.
    pub fn from_records(records: Vec<ViewRecord>) -> Self {
        Self { records }
    }

    /// All records, in source order.
    pub fn records(&self) -> &[ViewRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct countries present in the data, sorted ascending.
    pub fn distinct_countries(&self) -> Vec<String> {
        self.distinct(|r| r.country.as_str())
    }

    /// Distinct continents present in the data, sorted ascending.
    pub fn distinct_continents(&self) -> Vec<String> {
        self.distinct(|r| r.continent.as_str())
    }

    /// Distinct sporting-event labels present in the data, sorted ascending.
    /// Records for non-sport paths contribute nothing.
    pub fn distinct_events(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .records
            .iter()
            .filter_map(|r| r.sporting_event)
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    fn distinct<F>(&self, key: F) -> Vec<String>
    where
        F: Fn(&ViewRecord) -> &str,
    {
        let set: BTreeSet<&str> = self.records.iter().map(|r| key(r)).collect();
        set.into_iter().map(str::to_string).collect()
    }
}
