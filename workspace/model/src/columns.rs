//! Typed extraction of DataFrame columns.
//!
//! The CSV reader infers column types; these helpers cast each column to the
//! type the records need and turn nulls or failed casts into row-level errors.

use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;

use crate::error::{LoadError, Result};

/// Date layouts accepted for `dteday`, tried in order.
pub const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Name of the date column in both datasets.
pub const DATE_COLUMN: &str = "dteday";

pub(crate) fn required<'a>(file: &str, df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| LoadError::MissingColumn {
        file: file.to_string(),
        column: name.to_string(),
    })
}

/// Fails with the first required column missing from `df`.
pub(crate) fn ensure_columns(file: &str, df: &DataFrame, names: &[&str]) -> Result<()> {
    for name in names {
        required(file, df, name)?;
    }
    Ok(())
}

fn invalid(file: &str, column: &str, row: usize, value: impl Into<String>) -> LoadError {
    LoadError::InvalidValue {
        file: file.to_string(),
        column: column.to_string(),
        row: row + 1,
        value: value.into(),
    }
}

/// Raw cell text, used to report what failed to convert.
fn raw_cell(column: &Column, row: usize) -> String {
    column
        .get(row)
        .map(|value| value.to_string())
        .unwrap_or_else(|_| "null".to_string())
}

pub(crate) fn float_values(file: &str, df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = required(file, df, name)?;
    let cast = column.cast(&DataType::Float64)?;
    let values = cast.f64()?;

    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| value.ok_or_else(|| invalid(file, name, row, raw_cell(column, row))))
        .collect()
}

/// Like [`float_values`] but an absent column yields `None` for every row.
pub(crate) fn optional_float_values(
    file: &str,
    df: &DataFrame,
    name: &str,
) -> Result<Vec<Option<f64>>> {
    match df.column(name) {
        Ok(_) => Ok(float_values(file, df, name)?.into_iter().map(Some).collect()),
        Err(_) => Ok(vec![None; df.height()]),
    }
}

pub(crate) fn int_values<T>(file: &str, df: &DataFrame, name: &str) -> Result<Vec<T>>
where
    T: TryFrom<i64>,
{
    let column = required(file, df, name)?;
    let cast = column.cast(&DataType::Int64)?;
    let values = cast.i64()?;

    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value
                .and_then(|v| T::try_from(v).ok())
                .ok_or_else(|| invalid(file, name, row, raw_cell(column, row)))
        })
        .collect()
}

pub(crate) fn flag_values(file: &str, df: &DataFrame, name: &str) -> Result<Vec<bool>> {
    let values: Vec<u8> = int_values(file, df, name)?;
    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| match value {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(invalid(file, name, row, other.to_string())),
        })
        .collect()
}

/// Parses one date cell with the accepted layouts.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|datetime| datetime.date())
        })
}

/// Parses the whole date column; the first bad cell aborts the load.
pub(crate) fn date_values(file: &str, df: &DataFrame) -> Result<Vec<NaiveDate>> {
    let column = required(file, df, DATE_COLUMN)?;
    let text = column.cast(&DataType::String)?;
    let values = text.str()?;

    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            let value = value.unwrap_or_default();
            parse_date(value).ok_or_else(|| LoadError::DateParse {
                file: file.to_string(),
                row: row + 1,
                value: value.to_string(),
            })
        })
        .collect()
}
