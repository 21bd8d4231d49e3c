use chrono::NaiveDate;

use crate::views::ViewKind;

/// First rows of a dataset, already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePreview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Descriptive statistics of one numeric column.
///
/// Every statistic except `count` is `None` when the column has no values;
/// `std` is also `None` for a single value (sample deviation is undefined).
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q1: Option<f64>,
    pub median: Option<f64>,
    pub q3: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewOutput {
    pub daily_preview: TablePreview,
    pub hourly_preview: TablePreview,
    pub daily_summary: Vec<ColumnSummary>,
    pub daily_rows: usize,
    pub hourly_rows: usize,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

/// Ordinal temperature band of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemperatureCategory {
    Low,
    Medium,
    High,
}

impl TemperatureCategory {
    /// Display order of the bands.
    pub const ALL: [TemperatureCategory; 3] = [
        TemperatureCategory::Low,
        TemperatureCategory::Medium,
        TemperatureCategory::High,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TemperatureCategory::Low => "Low",
            TemperatureCategory::Medium => "Medium",
            TemperatureCategory::High => "High",
        }
    }
}

/// Box-plot summary of a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest observation within 1.5 IQR below `q1`.
    pub lower_whisker: f64,
    /// Largest observation within 1.5 IQR above `q3`.
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureBucket {
    pub category: TemperatureCategory,
    pub days: usize,
    /// `None` when no day falls in the bucket.
    pub demand: Option<BoxStats>,
    /// Total rentals of every day in the bucket, in dataset order.
    pub samples: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureOutput {
    /// `[min, 0.33, 0.66, max]` of the normalized temperature.
    pub bin_edges: [f64; 4],
    /// One entry per category, Low to High.
    pub buckets: Vec<TemperatureBucket>,
}

/// Whether an hour belongs to a working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayType {
    WorkingDay,
    WeekendHoliday,
}

impl DayType {
    pub const ALL: [DayType; 2] = [DayType::WorkingDay, DayType::WeekendHoliday];

    pub fn label(self) -> &'static str {
        match self {
            DayType::WorkingDay => "Working Day",
            DayType::WeekendHoliday => "Weekend/Holiday",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyUsage {
    pub hour: u8,
    pub day_type: DayType,
    pub mean_count: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyOutput {
    /// Only (hour, day type) cells present in the data, by hour then day type.
    pub rows: Vec<HourlyUsage>,
}

impl HourlyOutput {
    /// Points of one line of the chart.
    pub fn series(&self, day_type: DayType) -> (Vec<u8>, Vec<f64>) {
        self.rows
            .iter()
            .filter(|row| row.day_type == day_type)
            .map(|row| (row.hour, row.mean_count))
            .unzip()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyUsage {
    pub month: &'static str,
    /// `None` for months absent from the data.
    pub mean_count: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalOutput {
    /// Always twelve entries, January first.
    pub months: Vec<MonthlyUsage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserType {
    Casual,
    Registered,
}

impl UserType {
    pub fn label(self) -> &'static str {
        match self {
            UserType::Casual => "casual",
            UserType::Registered => "registered",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserShare {
    pub user_type: UserType,
    pub total: u64,
    pub percentage: f64,
}

impl UserShare {
    /// Share rounded to one decimal place.
    pub fn rounded_percentage(&self) -> f64 {
        (self.percentage * 10.0).round() / 10.0
    }

    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserComparisonOutput {
    /// Casual first, then registered.
    pub shares: [UserShare; 2],
}

impl UserComparisonOutput {
    pub fn combined_total(&self) -> u64 {
        self.shares.iter().map(|share| share.total).sum()
    }
}

/// Result of rendering one view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewOutput {
    Overview(OverviewOutput),
    Temperature(TemperatureOutput),
    Hourly(HourlyOutput),
    Seasonal(SeasonalOutput),
    UserComparison(UserComparisonOutput),
}

impl ViewOutput {
    pub fn kind(&self) -> ViewKind {
        match self {
            ViewOutput::Overview(_) => ViewKind::Overview,
            ViewOutput::Temperature(_) => ViewKind::TemperatureEffect,
            ViewOutput::Hourly(_) => ViewKind::HourlyPattern,
            ViewOutput::Seasonal(_) => ViewKind::SeasonalTrend,
            ViewOutput::UserComparison(_) => ViewKind::UserComparison,
        }
    }
}
