//! Bike-sharing rental datasets: schema, CSV loading and typed records.

pub mod columns;
pub mod dataset;
pub mod error;
pub mod record;

pub use dataset::{Dataset, DatasetPaths, Datasets};
pub use error::{LoadError, Result};
pub use record::{DailyRecord, HourlyRecord, Record};
