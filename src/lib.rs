//! FunOlympics Viewership Analytics
//!
//! In-memory filter-and-aggregate engine over a synthetic access log for the
//! FunOlympic Games broadcast site. The dataset is loaded once at startup and
//! never mutated afterwards; every query is a pure pass over the loaded
//! records, so concurrent readers need no locking.
//!
//! Two modules:
//! - [`dataset`]: loading, validation, and the immutable record store
//! - [`analytics`]: filtering, group-by counts, hourly bucketing, scalars

pub mod analytics;
pub mod dataset;

pub use analytics::{
    apply_filter, count_by, cross_filter_options, hourly_counts, hourly_counts_by_event,
    most_frequent_category, peak_hour, summarize, total_count, AggregateError, Dimension,
    EventHourlySeries, FilterSelection, HourlyCount, OptionDimension, ViewershipSummary,
};
pub use dataset::{AgeGroup, Dataset, Gender, IncomeStatus, LoadError, ViewRecord};
