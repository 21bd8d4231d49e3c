use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use polars::prelude::*;
use tracing::{debug, info, instrument, warn};

use crate::columns::{date_values, ensure_columns, DATE_COLUMN};
use crate::error::{LoadError, Result};
use crate::record::{DailyRecord, HourlyRecord, Record};

/// An immutable table of rentals.
///
/// Keeps the frame as read from disk (with `dteday` parsed to a date) for
/// previews and column statistics, plus the typed rows for aggregation.
#[derive(Debug, Clone)]
pub struct Dataset<R> {
    name: String,
    frame: DataFrame,
    records: Vec<R>,
}

impl<R: Record> Dataset<R> {
    /// Reads a CSV file with a header row.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        std::fs::metadata(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Reading CSV file {}", path.display());
        // Infer types from every row; a float column may hold only whole
        // numbers for a long stretch before its first fraction.
        let mut frame = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .and_then(|reader| reader.finish())
            .map_err(|e| LoadError::Csv {
                file: name.clone(),
                message: e.to_string(),
            })?;

        ensure_columns(&name, &frame, &R::required_columns())?;

        let dates = date_values(&name, &frame)?;
        frame.with_column(Column::new(DATE_COLUMN.into(), dates.clone()))?;

        let records = R::from_frame(&name, &frame, &dates)?;
        info!("Loaded {} rows from {}", records.len(), name);

        let dataset = Self { name, frame, records };
        dataset.warn_on_inconsistent_counts();
        Ok(dataset)
    }

    /// Builds a dataset from rows already in memory.
    pub fn from_records(name: impl Into<String>, records: Vec<R>) -> Result<Self> {
        let frame = R::to_frame(&records)?;
        Ok(Self {
            name: name.into(),
            frame,
            records,
        })
    }

    /// First and last date present.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        date_range(self.records.iter().map(|r| r.date()))
    }

    /// Number of rows where `cnt != casual + registered`.
    pub fn inconsistent_counts(&self) -> usize {
        self.records.iter().filter(|r| !r.counts_consistent()).count()
    }

    fn warn_on_inconsistent_counts(&self) {
        let inconsistent = self.inconsistent_counts();
        if inconsistent > 0 {
            warn!(
                "{}: {} rows where cnt differs from casual + registered",
                self.name, inconsistent
            );
        }
    }
}

impl<R> Dataset<R> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn date_range(dates: impl Iterator<Item = NaiveDate>) -> Option<(NaiveDate, NaiveDate)> {
    dates.fold(None, |range, date| match range {
        None => Some((date, date)),
        Some((first, last)) => Some((first.min(date), last.max(date))),
    })
}

/// Where the two input files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub daily: PathBuf,
    pub hourly: PathBuf,
}

impl DatasetPaths {
    pub fn new(data_dir: impl AsRef<Path>, daily_file: &str, hourly_file: &str) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            daily: data_dir.join(daily_file),
            hourly: data_dir.join(hourly_file),
        }
    }
}

/// Both datasets, loaded once and read by every render.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub daily: Dataset<DailyRecord>,
    pub hourly: Dataset<HourlyRecord>,
}

impl Datasets {
    /// Loads both files; any failure is returned before anything is served.
    #[instrument]
    pub fn load(paths: &DatasetPaths) -> Result<Self> {
        let daily = Dataset::load(&paths.daily)?;
        let hourly = Dataset::load(&paths.hourly)?;
        info!(
            daily_rows = daily.len(),
            hourly_rows = hourly.len(),
            "Datasets loaded"
        );
        Ok(Self { daily, hourly })
    }

    pub fn from_records(daily: Vec<DailyRecord>, hourly: Vec<HourlyRecord>) -> Result<Self> {
        Ok(Self {
            daily: Dataset::from_records("day.csv", daily)?,
            hourly: Dataset::from_records("hour.csv", hourly)?,
        })
    }
}
