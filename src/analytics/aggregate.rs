//! Group-by counts, hourly bucketing, and derived scalars.
//!
//! All functions take an iterator of borrowed records so they work equally on
//! a full dataset slice and on the output of `apply_filter`. Ordering rules
//! are load-bearing: `count_by` yields groups in first-occurrence order, and
//! both maximum pickers break ties toward the earliest entry, which keeps
//! results stable for a given source file.

use chrono::Timelike;
use serde::Serialize;
use std::collections::HashMap;

use crate::dataset::ViewRecord;

/// One-hour buckets per day. The single source of truth for the hourly axis.
pub const HOURS_PER_DAY: usize = 24;

/// A record attribute usable as a group-by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dimension {
    Country,
    AgeGroup,
    Gender,
    IncomeStatus,
    SportingEvent,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Country => "country",
            Dimension::AgeGroup => "age_group",
            Dimension::Gender => "gender",
            Dimension::IncomeStatus => "income_status",
            Dimension::SportingEvent => "sporting_event",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "country" => Some(Dimension::Country),
            "age_group" => Some(Dimension::AgeGroup),
            "gender" => Some(Dimension::Gender),
            "income_status" => Some(Dimension::IncomeStatus),
            "sporting_event" => Some(Dimension::SportingEvent),
            _ => None,
        }
    }

    pub fn all() -> &'static [Dimension] {
        &[
            Dimension::Country,
            Dimension::AgeGroup,
            Dimension::Gender,
            Dimension::IncomeStatus,
            Dimension::SportingEvent,
        ]
    }

    /// The record's value on this dimension. `None` only for
    /// `SportingEvent` on non-sport paths; such records are skipped by
    /// event-scoped breakdowns but still count everywhere else.
    pub fn value_of<'a>(&self, record: &'a ViewRecord) -> Option<&'a str> {
        match self {
            Dimension::Country => Some(record.country.as_str()),
            Dimension::AgeGroup => Some(record.age_group.as_str()),
            Dimension::Gender => Some(record.gender.as_str()),
            Dimension::IncomeStatus => Some(record.income.as_str()),
            Dimension::SportingEvent => record.sporting_event,
        }
    }
}

/// Aggregation failure on an empty scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateError {
    /// No input to pick a maximum from.
    EmptyInput,
}

impl std::fmt::Display for AggregateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "no records in scope"),
        }
    }
}

impl std::error::Error for AggregateError {}

/// Count of records in one hour-of-day bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourlyCount {
    /// Bucket starting hour, 0-23.
    pub hour: u32,
    pub count: u64,
}

/// Per-event hourly counts, one 24-slot row per sporting event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventHourlySeries {
    pub event: String,
    pub counts: [u64; HOURS_PER_DAY],
}

/// The dashboard's three numeric callouts in one pass.
///
/// Empty scopes fold to `None` instead of erroring, so the presentation
/// layer can render a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewershipSummary {
    pub total: u64,
    pub peak_hour: Option<u32>,
    pub top_event: Option<String>,
}

/// Group records by `dimension` and count each distinct value.
///
/// Groups appear in first-occurrence order of the scan. Values matched by
/// zero records are omitted rather than zero-filled; charts downstream
/// tolerate sparse category lists.
pub fn count_by<'a, I>(records: I, dimension: Dimension) -> Vec<(String, u64)>
where
    I: IntoIterator<Item = &'a ViewRecord>,
{
    let mut groups: Vec<(String, u64)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    for record in records {
        let Some(value) = dimension.value_of(record) else {
            continue;
        };
        match index.get(value) {
            Some(&i) => groups[i].1 += 1,
            None => {
                index.insert(value, groups.len());
                groups.push((value.to_string(), 1));
            }
        }
    }
    groups
}

/// Bucket records into 24 chronological one-hour intervals.
///
/// Returns all 24 buckets (zero-filled where empty) whenever at least one
/// record exists, and an empty vec otherwise.
pub fn hourly_counts<'a, I>(records: I) -> Vec<HourlyCount>
where
    I: IntoIterator<Item = &'a ViewRecord>,
{
    let mut buckets = [0u64; HOURS_PER_DAY];
    let mut any = false;
    for record in records {
        any = true;
        buckets[record.time.hour() as usize] += 1;
    }
    if !any {
        return Vec::new();
    }
    buckets
        .iter()
        .enumerate()
        .map(|(hour, &count)| HourlyCount {
            hour: hour as u32,
            count,
        })
        .collect()
}

/// Cardinality of the scope.
pub fn total_count<'a, I>(records: I) -> u64
where
    I: IntoIterator<Item = &'a ViewRecord>,
{
    records.into_iter().count() as u64
}

/// The bucket with the maximum count; ties go to the earliest hour.
pub fn peak_hour(series: &[HourlyCount]) -> Result<u32, AggregateError> {
    let mut best: Option<&HourlyCount> = None;
    for bucket in series {
        match best {
            Some(b) if bucket.count <= b.count => {}
            _ => best = Some(bucket),
        }
    }
    best.map(|b| b.hour).ok_or(AggregateError::EmptyInput)
}

/// The most frequent value of `dimension`; ties go to first occurrence.
///
/// Errors when no record in scope carries the dimension, which for
/// `SportingEvent` includes a scope of only non-sport paths.
pub fn most_frequent_category<'a, I>(
    records: I,
    dimension: Dimension,
) -> Result<String, AggregateError>
where
    I: IntoIterator<Item = &'a ViewRecord>,
{
    let counts = count_by(records, dimension);
    let mut best: Option<&(String, u64)> = None;
    for entry in &counts {
        match best {
            Some(b) if entry.1 <= b.1 => {}
            _ => best = Some(entry),
        }
    }
    best.map(|(value, _)| value.clone())
        .ok_or(AggregateError::EmptyInput)
}

/// Per-event 24-hour count rows, events in first-occurrence order.
/// Records without a sporting event are excluded.
pub fn hourly_counts_by_event<'a, I>(records: I) -> Vec<EventHourlySeries>
where
    I: IntoIterator<Item = &'a ViewRecord>,
{
    let mut rows: Vec<EventHourlySeries> = Vec::new();
    let mut index: HashMap<&'static str, usize> = HashMap::new();
    for record in records {
        let Some(event) = record.sporting_event else {
            continue;
        };
        let i = *index.entry(event).or_insert_with(|| {
            rows.push(EventHourlySeries {
                event: event.to_string(),
                counts: [0; HOURS_PER_DAY],
            });
            rows.len() - 1
        });
        rows[i].counts[record.time.hour() as usize] += 1;
    }
    rows
}

/// Compute the three numeric callouts for a scope.
pub fn summarize<'a, I>(records: I) -> ViewershipSummary
where
    I: IntoIterator<Item = &'a ViewRecord>,
{
    let records: Vec<&ViewRecord> = records.into_iter().collect();
    let hours = hourly_counts(records.iter().copied());
    ViewershipSummary {
        total: records.len() as u64,
        peak_hour: peak_hour(&hours).ok(),
        top_event: most_frequent_category(records.iter().copied(), Dimension::SportingEvent).ok(),
    }
}
