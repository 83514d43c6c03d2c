//! Dataset store
//!
//! Loads the access log into a fully-materialized, immutable collection of
//! [`ViewRecord`]s. Loading is strict: any row that cannot be parsed aborts
//! the load with a [`LoadError`] rather than being dropped, so a loaded
//! dataset always contains exactly one record per data row of the source.

pub mod events;
pub mod loader;
pub mod record;
pub mod store;

pub use loader::LoadError;
pub use record::{AgeGroup, Gender, IncomeStatus, ViewRecord};
pub use store::Dataset;

#[cfg(test)]
mod store_tests;
