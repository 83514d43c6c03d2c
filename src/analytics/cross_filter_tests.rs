//! Tests for widget option narrowing.

use chrono::NaiveTime;

use crate::analytics::cross_filter::{
    continent_options, country_options, cross_filter_options, OptionDimension,
};
use crate::dataset::events::sporting_event_for_path;
use crate::dataset::{AgeGroup, Dataset, Gender, IncomeStatus, ViewRecord};

fn rec(country: &str, continent: &str) -> ViewRecord {
    ViewRecord {
        time: NaiveTime::parse_from_str("12:00:00", "%H:%M:%S").unwrap(),
        ip_address: "10.0.0.1".to_string(),
        method: "GET".to_string(),
        path: "/tennis".to_string(),
        status: 200,
        country: country.to_string(),
        continent: continent.to_string(),
        gender: Gender::Female,
        age: 25,
        income: IncomeStatus::Low,
        sporting_event: sporting_event_for_path("/tennis"),
        age_group: AgeGroup::from_age(25),
    }
}

fn fixture() -> Dataset {
    Dataset::from_records(vec![
        rec("France", "Europe"),
        rec("Germany", "Europe"),
        rec("Japan", "Asia"),
        rec("Kenya", "Africa"),
        rec("France", "Europe"),
    ])
}

#[test]
fn continent_selection_narrows_countries() {
    let dataset = fixture();
    let countries = country_options(&dataset, &["Europe".to_string()]);
    assert_eq!(countries, vec!["France".to_string(), "Germany".to_string()]);
}

#[test]
fn country_selection_narrows_continents() {
    let dataset = fixture();
    let continents = continent_options(&dataset, &["Japan".to_string(), "Kenya".to_string()]);
    assert_eq!(continents, vec!["Africa".to_string(), "Asia".to_string()]);
}

#[test]
fn no_selection_yields_full_distinct_sets() {
    let dataset = fixture();
    assert_eq!(
        country_options(&dataset, &[]),
        vec![
            "France".to_string(),
            "Germany".to_string(),
            "Japan".to_string(),
            "Kenya".to_string(),
        ]
    );
    assert_eq!(
        continent_options(&dataset, &[]),
        vec!["Africa".to_string(), "Asia".to_string(), "Europe".to_string()]
    );
}

#[test]
fn narrowing_round_trips() {
    let dataset = fixture();
    // Continent -> countries -> continents comes back to a set containing
    // the original continent.
    let countries = country_options(&dataset, &["Europe".to_string()]);
    let continents = continent_options(&dataset, &countries);
    assert!(continents.contains(&"Europe".to_string()));
    assert_eq!(continents.len(), 1);
}

#[test]
fn unknown_selection_narrows_to_nothing() {
    let dataset = fixture();
    assert!(country_options(&dataset, &["Atlantis".to_string()]).is_empty());
    assert!(continent_options(&dataset, &["Narnia".to_string()]).is_empty());
}

#[test]
fn continent_selection_takes_precedence() {
    let dataset = fixture();
    // With both selections present, the continent selection drives the
    // result regardless of the requested dimension.
    let options = cross_filter_options(
        &dataset,
        &["Asia".to_string()],
        &["France".to_string()],
        OptionDimension::Countries,
    );
    assert_eq!(options, vec!["Japan".to_string()]);
}
