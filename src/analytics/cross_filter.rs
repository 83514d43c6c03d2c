//! Bidirectional narrowing between the country and continent widgets.
//!
//! Selecting continents narrows the country choices to members of those
//! continents; selecting countries narrows the continent choices to the
//! continents containing them. With nothing selected, each widget offers the
//! full distinct set. Membership comes from the loaded data, never from a
//! separate geography table.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::dataset::Dataset;

/// Which widget's option list is being computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OptionDimension {
    Countries,
    Continents,
}

impl OptionDimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionDimension::Countries => "countries",
            OptionDimension::Continents => "continents",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "countries" => Some(OptionDimension::Countries),
            "continents" => Some(OptionDimension::Continents),
            _ => None,
        }
    }
}

/// Option list for `target` given the current selections, sorted ascending.
///
/// Continent selections take precedence: when present, the result is the
/// countries inside them. Otherwise a country selection yields the
/// continents containing those countries. With neither, the full distinct
/// set for `target` is returned.
pub fn cross_filter_options(
    dataset: &Dataset,
    selected_continents: &[String],
    selected_countries: &[String],
    target: OptionDimension,
) -> Vec<String> {
    if !selected_continents.is_empty() {
        let wanted: HashSet<&str> = selected_continents.iter().map(String::as_str).collect();
        let set: BTreeSet<&str> = dataset
            .records()
            .iter()
            .filter(|r| wanted.contains(r.continent.as_str()))
            .map(|r| r.country.as_str())
            .collect();
        return set.into_iter().map(str::to_string).collect();
    }
    if !selected_countries.is_empty() {
        let wanted: HashSet<&str> = selected_countries.iter().map(String::as_str).collect();
        let set: BTreeSet<&str> = dataset
            .records()
            .iter()
            .filter(|r| wanted.contains(r.country.as_str()))
            .map(|r| r.continent.as_str())
            .collect();
        return set.into_iter().map(str::to_string).collect();
    }
    match target {
        OptionDimension::Countries => dataset.distinct_countries(),
        OptionDimension::Continents => dataset.distinct_continents(),
    }
}

/// Country widget options given the continent selection.
pub fn country_options(dataset: &Dataset, selected_continents: &[String]) -> Vec<String> {
    cross_filter_options(dataset, selected_continents, &[], OptionDimension::Countries)
}

/// Continent widget options given the country selection.
pub fn continent_options(dataset: &Dataset, selected_countries: &[String]) -> Vec<String> {
    cross_filter_options(dataset, &[], selected_countries, OptionDimension::Continents)
}
