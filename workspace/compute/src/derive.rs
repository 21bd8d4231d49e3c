//! View-local attributes derived from a record on every render.

use chrono::{Datelike, NaiveDate};
use common::{DayType, TemperatureCategory};

/// Upper bounds of the Low and Medium temperature bands.
///
/// Fixed absolute values on the normalized scale, not data quantiles.
pub const TEMPERATURE_BIN_EDGES: [f64; 2] = [0.33, 0.66];

/// Calendar order of month abbreviations.
pub const MONTH_ORDER: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Band of a normalized temperature. Each band includes its upper edge.
///
/// Returns `None` for NaN.
pub fn temperature_category(temp: f64) -> Option<TemperatureCategory> {
    let [low_edge, medium_edge] = TEMPERATURE_BIN_EDGES;
    if temp.is_nan() {
        None
    } else if temp <= low_edge {
        Some(TemperatureCategory::Low)
    } else if temp <= medium_edge {
        Some(TemperatureCategory::Medium)
    } else {
        Some(TemperatureCategory::High)
    }
}

pub fn day_type(working_day: bool) -> DayType {
    if working_day {
        DayType::WorkingDay
    } else {
        DayType::WeekendHoliday
    }
}

/// Three-letter English month name of a date.
pub fn month_abbreviation(date: NaiveDate) -> &'static str {
    MONTH_ORDER[date.month0() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_boundaries() {
        assert_eq!(temperature_category(0.0), Some(TemperatureCategory::Low));
        assert_eq!(temperature_category(0.33), Some(TemperatureCategory::Low));
        assert_eq!(temperature_category(0.3300001), Some(TemperatureCategory::Medium));
        assert_eq!(temperature_category(0.5), Some(TemperatureCategory::Medium));
        assert_eq!(temperature_category(0.66), Some(TemperatureCategory::Medium));
        assert_eq!(temperature_category(0.9), Some(TemperatureCategory::High));
        assert_eq!(temperature_category(f64::NAN), None);
    }

    #[test]
    fn test_bin_edges_are_fixed() {
        assert_eq!(TEMPERATURE_BIN_EDGES, [0.33, 0.66]);
    }

    #[test]
    fn test_day_type_from_flag() {
        assert_eq!(day_type(true).label(), "Working Day");
        assert_eq!(day_type(false).label(), "Weekend/Holiday");
    }

    #[test]
    fn test_month_abbreviation() {
        let date = NaiveDate::from_ymd_opt(2012, 9, 15).unwrap();
        assert_eq!(month_abbreviation(date), "Sep");
        assert_eq!(date.format("%b").to_string(), month_abbreviation(date));
        assert_eq!(MONTH_ORDER.len(), 12);
    }
}
