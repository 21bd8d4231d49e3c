use std::collections::HashMap;

use common::{MonthlyUsage, SeasonalOutput};
use model::DailyRecord;
use tracing::{debug, instrument};

use crate::derive::{month_abbreviation, MONTH_ORDER};

/// Mean daily rentals per month name, in calendar order.
///
/// Grouping by name loses calendar order, so the result is reindexed on
/// [`MONTH_ORDER`]. Months with no days keep `mean_count: None`.
#[instrument(skip(days), fields(rows = days.len()))]
pub fn seasonal_trend(days: &[DailyRecord]) -> SeasonalOutput {
    let mut by_month: HashMap<&'static str, (f64, usize)> = HashMap::new();
    for day in days {
        let entry = by_month.entry(month_abbreviation(day.date)).or_insert((0.0, 0));
        entry.0 += day.count as f64;
        entry.1 += 1;
    }

    debug!("Daily records span {} distinct months", by_month.len());

    let months = MONTH_ORDER
        .iter()
        .map(|&month| MonthlyUsage {
            month,
            mean_count: by_month.get(month).map(|&(sum, n)| sum / n as f64),
        })
        .collect();

    SeasonalOutput { months }
}
