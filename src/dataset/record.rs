//! View record and its categorical attributes.

use chrono::NaiveTime;
use serde::Serialize;

/// Viewer gender as recorded by the log source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Male,
    Female,
    NonBinary,
}

impl Gender {
    /// Canonical label, matching the spelling used in the log source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "Non-binary",
        }
    }

    /// Parse the log-source spelling. Returns `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            "Non-binary" => Some(Gender::NonBinary),
            _ => None,
        }
    }
}

/// Viewer income status as recorded by the log source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IncomeStatus {
    Low,
    Middle,
    High,
}

impl IncomeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeStatus::Low => "Low",
            IncomeStatus::Middle => "Middle",
            IncomeStatus::High => "High",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Low" => Some(IncomeStatus::Low),
            "Middle" => Some(IncomeStatus::Middle),
            "High" => Some(IncomeStatus::High),
            _ => None,
        }
    }
}

/// Age bucket.
///
/// Six contiguous, non-overlapping buckets that are exhaustive over the
/// 16-80 range emitted by the log source. Bucketing happens once at load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AgeGroup {
    From16To24,
    From25To34,
    From35To44,
    From45To54,
    From55To64,
    Over65,
}

impl AgeGroup {
    /// Bucket an age. Upper bounds are inclusive (24 belongs to 16-24).
    pub fn from_age(age: u8) -> Self {
        match age {
            0..=24 => AgeGroup::From16To24,
            25..=34 => AgeGroup::From25To34,
            35..=44 => AgeGroup::From35To44,
            45..=54 => AgeGroup::From45To54,
            55..=64 => AgeGroup::From55To64,
            _ => AgeGroup::Over65,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::From16To24 => "16-24",
            AgeGroup::From25To34 => "25-34",
            AgeGroup::From35To44 => "35-44",
            AgeGroup::From45To54 => "45-54",
            AgeGroup::From55To64 => "55-64",
            AgeGroup::Over65 => "65+",
        }
    }

    /// All buckets in ascending age order.
    pub fn all() -> &'static [AgeGroup] {
        &[
            AgeGroup::From16To24,
            AgeGroup::From25To34,
            AgeGroup::From35To44,
            AgeGroup::From45To54,
            AgeGroup::From55To64,
            AgeGroup::Over65,
        ]
    }
}

/// One simulated page-view event from the access log.
///
/// The `continent` field is functionally dependent on `country`; it is
/// trusted as written by the generator and never re-derived here.
/// `sporting_event` and `age_group` are derived once at load.
#[derive(Debug, Clone, Serialize)]
pub struct ViewRecord {
    /// Time of day of the request. The log carries no date component.
    pub time: NaiveTime,
    /// Client address. Carried through, unused in aggregation.
    pub ip_address: String,
    /// HTTP method. Unused in aggregation.
    pub method: String,
    /// Request path on the broadcast site.
    pub path: String,
    /// HTTP status code. Unused in aggregation.
    pub status: u16,
    pub country: String,
    pub continent: String,
    pub gender: Gender,
    pub age: u8,
    pub income: IncomeStatus,
    /// Sporting event label for sport paths; `None` for everything else
    /// (home page, schedule, search, ...).
    pub sporting_event: Option<&'static str>,
    pub age_group: AgeGroup,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_buckets_partition_the_range() {
        // Boundary ages must land on the documented side.
        assert_eq!(AgeGroup::from_age(16), AgeGroup::From16To24);
        assert_eq!(AgeGroup::from_age(24), AgeGroup::From16To24);
        assert_eq!(AgeGroup::from_age(25), AgeGroup::From25To34);
        assert_eq!(AgeGroup::from_age(34), AgeGroup::From25To34);
        assert_eq!(AgeGroup::from_age(35), AgeGroup::From35To44);
        assert_eq!(AgeGroup::from_age(44), AgeGroup::From35To44);
        assert_eq!(AgeGroup::from_age(45), AgeGroup::From45To54);
        assert_eq!(AgeGroup::from_age(54), AgeGroup::From45To54);
        assert_eq!(AgeGroup::from_age(55), AgeGroup::From55To64);
        assert_eq!(AgeGroup::from_age(64), AgeGroup::From55To64);
        assert_eq!(AgeGroup::from_age(65), AgeGroup::Over65);
        assert_eq!(AgeGroup::from_age(80), AgeGroup::Over65);
    }

    #[test]
    fn every_age_in_range_has_exactly_one_bucket() {
        for age in 16u8..=80 {
            let bucket = AgeGroup::from_age(age);
            let hits = AgeGroup::all().iter().filter(|b| **b == bucket).count();
            assert_eq!(hits, 1, "age {} bucketed ambiguously", age);
        }
    }

    #[test]
    fn categorical_parse_round_trips() {
        for gender in [Gender::Male, Gender::Female, Gender::NonBinary] {
            assert_eq!(Gender::parse(gender.as_str()), Some(gender));
        }
        for income in [IncomeStatus::Low, IncomeStatus::Middle, IncomeStatus::High] {
            assert_eq!(IncomeStatus::parse(income.as_str()), Some(income));
        }
        assert_eq!(Gender::parse("male"), None);
        assert_eq!(IncomeStatus::parse("middle"), None);
    }
}
