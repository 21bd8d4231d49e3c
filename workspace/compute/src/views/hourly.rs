use std::collections::BTreeMap;

use common::{DayType, HourlyOutput, HourlyUsage};
use model::HourlyRecord;
use tracing::{debug, instrument};

use crate::derive::day_type;

/// Mean rentals per (hour, day type) cell.
///
/// Cells without records are left out rather than reported as zero.
#[instrument(skip(hours), fields(rows = hours.len()))]
pub fn hourly_pattern(hours: &[HourlyRecord]) -> HourlyOutput {
    let mut cells: BTreeMap<(u8, DayType), (f64, usize)> = BTreeMap::new();

    for record in hours {
        let cell = cells
            .entry((record.hour, day_type(record.working_day)))
            .or_insert((0.0, 0));
        cell.0 += record.count as f64;
        cell.1 += 1;
    }

    debug!("Grouped hourly records into {} cells", cells.len());

    let rows = cells
        .into_iter()
        .map(|((hour, day_type), (sum, n))| HourlyUsage {
            hour,
            day_type,
            mean_count: sum / n as f64,
        })
        .collect();

    HourlyOutput { rows }
}
