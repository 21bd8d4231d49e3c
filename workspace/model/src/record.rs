use std::ops::Deref;

use chrono::NaiveDate;
use polars::prelude::*;

use crate::columns::{
    ensure_columns, flag_values, float_values, int_values, optional_float_values, DATE_COLUMN,
};
use crate::error::Result;

/// Columns read from both the daily and the hourly file.
pub const DAILY_COLUMNS: [&str; 14] = [
    "dteday",
    "season",
    "yr",
    "mnth",
    "holiday",
    "weekday",
    "workingday",
    "weathersit",
    "temp",
    "hum",
    "windspeed",
    "casual",
    "registered",
    "cnt",
];

/// Extra column of the hourly file.
pub const HOUR_COLUMN: &str = "hr";

/// A row type that can be read from and written to a dataset frame.
pub trait Record: Sized {
    /// Columns that must be present for a load to succeed.
    fn required_columns() -> Vec<&'static str>;

    /// Builds one record per frame row; `dates` is the parsed `dteday` column.
    fn from_frame(file: &str, df: &DataFrame, dates: &[NaiveDate]) -> Result<Vec<Self>>;

    /// Inverse of [`Record::from_frame`], used for in-memory datasets.
    fn to_frame(records: &[Self]) -> PolarsResult<DataFrame>;

    /// Calendar date of the row.
    fn date(&self) -> NaiveDate;

    /// Whether `cnt == casual + registered` holds.
    fn counts_consistent(&self) -> bool;
}

/// One day of rentals.
///
/// Temperature, humidity and windspeed are normalized to 0..=1.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub season: u8,
    /// 0 for the first year of the dataset, 1 for the second.
    pub year: u8,
    pub month: u8,
    pub holiday: bool,
    pub weekday: u8,
    pub working_day: bool,
    pub weather: u8,
    pub temp: f64,
    /// Feels-like temperature, when the file carries `atemp`.
    pub atemp: Option<f64>,
    pub humidity: f64,
    pub windspeed: f64,
    pub casual: u32,
    pub registered: u32,
    pub count: u32,
}

impl DailyRecord {
    fn columns(records: &[Self]) -> Vec<Column> {
        fn col<T, F>(name: &str, records: &[DailyRecord], f: F) -> Column
        where
            F: Fn(&DailyRecord) -> T,
            Series: NamedFrom<Vec<T>, [T]>,
        {
            Column::new(name.into(), records.iter().map(f).collect::<Vec<T>>())
        }

        vec![
            col(DATE_COLUMN, records, |r| r.date),
            col("season", records, |r| r.season as i64),
            col("yr", records, |r| r.year as i64),
            col("mnth", records, |r| r.month as i64),
            col("holiday", records, |r| r.holiday as i64),
            col("weekday", records, |r| r.weekday as i64),
            col("workingday", records, |r| r.working_day as i64),
            col("weathersit", records, |r| r.weather as i64),
            col("temp", records, |r| r.temp),
            col("atemp", records, |r| r.atemp),
            col("hum", records, |r| r.humidity),
            col("windspeed", records, |r| r.windspeed),
            col("casual", records, |r| r.casual as i64),
            col("registered", records, |r| r.registered as i64),
            col("cnt", records, |r| r.count as i64),
        ]
    }
}

impl Record for DailyRecord {
    fn required_columns() -> Vec<&'static str> {
        DAILY_COLUMNS.to_vec()
    }

    fn from_frame(file: &str, df: &DataFrame, dates: &[NaiveDate]) -> Result<Vec<Self>> {
        ensure_columns(file, df, &DAILY_COLUMNS)?;

        let season: Vec<u8> = int_values(file, df, "season")?;
        let year: Vec<u8> = int_values(file, df, "yr")?;
        let month: Vec<u8> = int_values(file, df, "mnth")?;
        let holiday = flag_values(file, df, "holiday")?;
        let weekday: Vec<u8> = int_values(file, df, "weekday")?;
        let working_day = flag_values(file, df, "workingday")?;
        let weather: Vec<u8> = int_values(file, df, "weathersit")?;
        let temp = float_values(file, df, "temp")?;
        let atemp = optional_float_values(file, df, "atemp")?;
        let humidity = float_values(file, df, "hum")?;
        let windspeed = float_values(file, df, "windspeed")?;
        let casual: Vec<u32> = int_values(file, df, "casual")?;
        let registered: Vec<u32> = int_values(file, df, "registered")?;
        let count: Vec<u32> = int_values(file, df, "cnt")?;

        let records = (0..df.height())
            .map(|i| DailyRecord {
                date: dates[i],
                season: season[i],
                year: year[i],
                month: month[i],
                holiday: holiday[i],
                weekday: weekday[i],
                working_day: working_day[i],
                weather: weather[i],
                temp: temp[i],
                atemp: atemp[i],
                humidity: humidity[i],
                windspeed: windspeed[i],
                casual: casual[i],
                registered: registered[i],
                count: count[i],
            })
            .collect();

        Ok(records)
    }

    fn to_frame(records: &[Self]) -> PolarsResult<DataFrame> {
        DataFrame::new(Self::columns(records))
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn counts_consistent(&self) -> bool {
        u64::from(self.casual) + u64::from(self.registered) == u64::from(self.count)
    }
}

/// One hour of rentals: the day's fields plus the hour of day.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyRecord {
    pub day: DailyRecord,
    /// 0..=23
    pub hour: u8,
}

impl Deref for HourlyRecord {
    type Target = DailyRecord;

    fn deref(&self) -> &Self::Target {
        &self.day
    }
}

impl Record for HourlyRecord {
    fn required_columns() -> Vec<&'static str> {
        let mut columns = DAILY_COLUMNS.to_vec();
        columns.push(HOUR_COLUMN);
        columns
    }

    fn from_frame(file: &str, df: &DataFrame, dates: &[NaiveDate]) -> Result<Vec<Self>> {
        ensure_columns(file, df, &Self::required_columns())?;

        let hours: Vec<u8> = int_values(file, df, HOUR_COLUMN)?;
        if let Some(row) = hours.iter().position(|&hour| hour > 23) {
            return Err(crate::LoadError::InvalidValue {
                file: file.to_string(),
                column: HOUR_COLUMN.to_string(),
                row: row + 1,
                value: hours[row].to_string(),
            });
        }

        let days = DailyRecord::from_frame(file, df, dates)?;
        Ok(days
            .into_iter()
            .zip(hours)
            .map(|(day, hour)| HourlyRecord { day, hour })
            .collect())
    }

    fn to_frame(records: &[Self]) -> PolarsResult<DataFrame> {
        let days: Vec<DailyRecord> = records.iter().map(|r| r.day.clone()).collect();
        let mut columns = DailyRecord::columns(&days);
        let hours: Vec<i64> = records.iter().map(|r| r.hour as i64).collect();
        // hr sits after mnth, as in the source files
        columns.insert(4, Column::new(HOUR_COLUMN.into(), hours));
        DataFrame::new(columns)
    }

    fn date(&self) -> NaiveDate {
        self.day.date
    }

    fn counts_consistent(&self) -> bool {
        self.day.counts_consistent()
    }
}
