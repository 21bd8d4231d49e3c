use common::{ColumnSummary, OverviewOutput, TablePreview};
use model::Datasets;
use polars::prelude::*;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::stats::summarize;

/// Numeric columns of the daily file covered by the statistics table.
///
/// Columns absent from a loaded file are skipped.
pub const DAILY_SUMMARY_COLUMNS: [&str; 15] = [
    "instant",
    "season",
    "yr",
    "mnth",
    "holiday",
    "weekday",
    "workingday",
    "weathersit",
    "temp",
    "atemp",
    "hum",
    "windspeed",
    "casual",
    "registered",
    "cnt",
];

/// Head of both datasets plus descriptive statistics of the daily one.
#[instrument(skip(datasets))]
pub fn data_overview(datasets: &Datasets, preview_rows: usize) -> Result<OverviewOutput> {
    let daily_preview = preview(datasets.daily.frame(), preview_rows)?;
    let hourly_preview = preview(datasets.hourly.frame(), preview_rows)?;
    let daily_summary = summarize_frame(datasets.daily.frame())?;
    debug!("Summarized {} daily columns", daily_summary.len());

    Ok(OverviewOutput {
        daily_preview,
        hourly_preview,
        daily_summary,
        daily_rows: datasets.daily.len(),
        hourly_rows: datasets.hourly.len(),
        date_range: datasets.daily.date_range(),
    })
}

fn preview(df: &DataFrame, rows: usize) -> Result<TablePreview> {
    let head = df.head(Some(rows));
    let columns = head
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut table_rows = Vec::with_capacity(head.height());
    for i in 0..head.height() {
        let row = head
            .get_columns()
            .iter()
            .map(|column| column.get(i).map(format_cell))
            .collect::<PolarsResult<Vec<String>>>()?;
        table_rows.push(row);
    }

    Ok(TablePreview {
        columns,
        rows: table_rows,
    })
}

fn format_cell(value: AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

fn summarize_frame(df: &DataFrame) -> Result<Vec<ColumnSummary>> {
    let mut summaries = Vec::new();
    for name in DAILY_SUMMARY_COLUMNS {
        let Ok(column) = df.column(name) else {
            continue;
        };
        let cast = column.cast(&DataType::Float64)?;
        let values: Vec<f64> = cast.f64()?.into_iter().flatten().collect();
        summaries.push(summarize(name, &values));
    }
    Ok(summaries)
}
