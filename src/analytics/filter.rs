//! Filter selections and the combined record predicate.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::dataset::ViewRecord;

/// One user interaction's worth of filter state.
///
/// Each set restricts its own dimension; an empty set means "no restriction"
/// on that dimension, not "match nothing". The three dimensions combine
/// conjunctively, membership within a dimension disjunctively. Labels that
/// occur in no record simply match zero records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub events: HashSet<String>,
    pub countries: HashSet<String>,
    pub continents: HashSet<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.events = events.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_continents<I, S>(mut self, continents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.continents = continents.into_iter().map(Into::into).collect();
        self
    }

    /// True when no dimension restricts anything.
    pub fn is_unrestricted(&self) -> bool {
        self.events.is_empty() && self.countries.is_empty() && self.continents.is_empty()
    }

    /// The combined predicate. A record with no sporting event can never
    /// match a non-empty event selection.
    pub fn matches(&self, record: &ViewRecord) -> bool {
        let event_ok = self.events.is_empty()
            || record
                .sporting_event
                .is_some_and(|e| self.events.contains(e));
        let country_ok = self.countries.is_empty() || self.countries.contains(&record.country);
        let continent_ok =
            self.continents.is_empty() || self.continents.contains(&record.continent);
        event_ok && country_ok && continent_ok
    }
}

/// Filter `records` down to the selection, preserving source order.
///
/// The all-empty selection is the identity: every record is kept, in order.
pub fn apply_filter<'a>(
    records: &'a [ViewRecord],
    selection: &FilterSelection,
) -> Vec<&'a ViewRecord> {
    records.iter().filter(|r| selection.matches(r)).collect()
}
