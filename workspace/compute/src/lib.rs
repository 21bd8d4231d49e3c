pub mod derive;
pub mod error;
pub mod stats;
pub mod views;

use common::{ViewKind, ViewOutput};
use model::Datasets;
use tracing::{debug, instrument};

pub use error::{ComputeError, Result};

/// Number of rows shown by the overview previews when not configured.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Everything a view reads while rendering.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub datasets: &'a Datasets,
    pub preview_rows: usize,
}

impl<'a> ViewContext<'a> {
    pub fn new(datasets: &'a Datasets) -> Self {
        Self {
            datasets,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }

    pub fn with_preview_rows(mut self, preview_rows: usize) -> Self {
        self.preview_rows = preview_rows;
        self
    }
}

/// Computes the output of the selected view.
///
/// Only the selected view runs. Calling this twice with the same inputs
/// yields equal outputs.
#[instrument(skip(ctx), fields(preview_rows = ctx.preview_rows))]
pub fn compute_view(kind: ViewKind, ctx: &ViewContext) -> Result<ViewOutput> {
    debug!("Computing view {}", kind.slug());
    let datasets = ctx.datasets;

    let output = match kind {
        ViewKind::Overview => {
            ViewOutput::Overview(views::data_overview(datasets, ctx.preview_rows)?)
        }
        ViewKind::TemperatureEffect => {
            ViewOutput::Temperature(views::temperature_effect(datasets.daily.records())?)
        }
        ViewKind::HourlyPattern => {
            ViewOutput::Hourly(views::hourly_pattern(datasets.hourly.records()))
        }
        ViewKind::SeasonalTrend => {
            ViewOutput::Seasonal(views::seasonal_trend(datasets.daily.records()))
        }
        ViewKind::UserComparison => {
            ViewOutput::UserComparison(views::user_comparison(datasets.daily.records())?)
        }
    };

    Ok(output)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::path::Path;

    use chrono::{Datelike, NaiveDate};
    use model::{DailyRecord, DatasetPaths, Datasets, HourlyRecord};

    /// A daily record with neutral weather and `cnt = casual + registered`.
    pub fn daily(
        date: (i32, u32, u32),
        temp: f64,
        casual: u32,
        registered: u32,
        working_day: bool,
    ) -> DailyRecord {
        let date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        DailyRecord {
            date,
            season: 1,
            year: 0,
            month: date.month() as u8,
            holiday: false,
            weekday: date.weekday().num_days_from_sunday() as u8,
            working_day,
            weather: 1,
            temp,
            atemp: Some(temp),
            humidity: 0.5,
            windspeed: 0.2,
            casual,
            registered,
            count: casual + registered,
        }
    }

    /// An hourly record whose rentals are all registered.
    pub fn hourly(date: (i32, u32, u32), hour: u8, count: u32, working_day: bool) -> HourlyRecord {
        HourlyRecord {
            day: daily(date, 0.4, 0, count, working_day),
            hour,
        }
    }

    pub fn fixture_datasets() -> Datasets {
        let dir = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../model/fixtures"));
        Datasets::load(&DatasetPaths::new(dir, "day.csv", "hour.csv")).unwrap()
    }
}
