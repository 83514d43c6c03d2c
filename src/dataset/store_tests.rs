//! Tests for the immutable dataset view and distinct-set accessors.

use chrono::NaiveTime;

use crate::dataset::events::sporting_event_for_path;
use crate::dataset::{AgeGroup, Dataset, Gender, IncomeStatus, ViewRecord};

fn rec(path: &str, country: &str, continent: &str) -> ViewRecord {
    ViewRecord {
        time: NaiveTime::parse_from_str("10:00:00", "%H:%M:%S").unwrap(),
        ip_address: "10.0.0.1".to_string(),
        method: "GET".to_string(),
        path: path.to_string(),
        status: 200,
        country: country.to_string(),
        continent: continent.to_string(),
        gender: Gender::Male,
        age: 50,
        income: IncomeStatus::Middle,
        sporting_event: sporting_event_for_path(path),
        age_group: AgeGroup::from_age(50),
    }
}

#[test]
fn distinct_sets_are_sorted_and_deduped() {
    let dataset = Dataset::from_records(vec![
        rec("/tennis", "Kenya", "Africa"),
        rec("/tennis", "France", "Europe"),
        rec("/home", "France", "Europe"),
        rec("/diving", "Brazil", "South America"),
    ]);
    assert_eq!(
        dataset.distinct_countries(),
        vec!["Brazil".to_string(), "France".to_string(), "Kenya".to_string()]
    );
    assert_eq!(
        dataset.distinct_continents(),
        vec![
            "Africa".to_string(),
            "Europe".to_string(),
            "South America".to_string(),
        ]
    );
}

#[test]
fn distinct_events_skip_non_sport_paths() {
    let dataset = Dataset::from_records(vec![
        rec("/tennis", "France", "Europe"),
        rec("/home", "France", "Europe"),
        rec("/basketball", "Kenya", "Africa"),
        rec("/basketball", "France", "Europe"),
    ]);
    assert_eq!(
        dataset.distinct_events(),
        vec!["Basketball".to_string(), "Tennis".to_string()]
    );
}

#[test]
fn records_preserve_source_order() {
    let dataset = Dataset::from_records(vec![
        rec("/tennis", "A", "X"),
        rec("/diving", "B", "Y"),
        rec("/karate", "C", "Z"),
    ]);
    let countries: Vec<&str> = dataset.records().iter().map(|r| r.country.as_str()).collect();
    assert_eq!(countries, vec!["A", "B", "C"]);
    assert_eq!(dataset.len(), 3);
    assert!(!dataset.is_empty());
}

#[test]
fn empty_dataset_reports_empty() {
    let dataset = Dataset::from_records(Vec::new());
    assert!(dataset.is_empty());
    assert!(dataset.distinct_countries().is_empty());
    assert!(dataset.distinct_events().is_empty());
}
