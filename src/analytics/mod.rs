//! Filter-aggregation engine.
//!
//! Pure functions over `(records, selection)`. None of them mutate or clone
//! the dataset; filtered views are vectors of borrows into the store.
//!
//! ```text
//! selection widgets ──▶ FilterSelection ──▶ apply_filter ─┬─▶ count_by
//!                                                         ├─▶ hourly_counts ──▶ peak_hour
//!                                                         ├─▶ total_count
//!                                                         └─▶ most_frequent_category
//! ```

pub mod aggregate;
pub mod cross_filter;
pub mod filter;

pub use aggregate::{
    count_by, hourly_counts, hourly_counts_by_event, most_frequent_category, peak_hour,
    summarize, total_count, AggregateError, Dimension, EventHourlySeries, HourlyCount,
    ViewershipSummary,
};
pub use cross_filter::{continent_options, country_options, cross_filter_options, OptionDimension};
pub use filter::{apply_filter, FilterSelection};

#[cfg(test)]
mod cross_filter_tests;
