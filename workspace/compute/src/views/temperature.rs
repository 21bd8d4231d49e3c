use std::collections::BTreeMap;

use common::{TemperatureBucket, TemperatureCategory, TemperatureOutput};
use model::DailyRecord;
use tracing::{debug, instrument};

use crate::derive::{temperature_category, TEMPERATURE_BIN_EDGES};
use crate::error::{ComputeError, Result};
use crate::stats::box_stats;

/// Days per temperature band and the spread of total rentals in each band.
#[instrument(skip(days), fields(rows = days.len()))]
pub fn temperature_effect(days: &[DailyRecord]) -> Result<TemperatureOutput> {
    let (min, max) = days
        .iter()
        .map(|day| day.temp)
        .filter(|temp| !temp.is_nan())
        .fold(None, |range: Option<(f64, f64)>, temp| match range {
            None => Some((temp, temp)),
            Some((min, max)) => Some((min.min(temp), max.max(temp))),
        })
        .ok_or_else(|| ComputeError::EmptyData("no daily temperatures".to_string()))?;

    let mut samples: BTreeMap<TemperatureCategory, Vec<f64>> = TemperatureCategory::ALL
        .into_iter()
        .map(|category| (category, Vec::new()))
        .collect();

    for day in days {
        if let Some(category) = temperature_category(day.temp) {
            samples.entry(category).or_default().push(day.count as f64);
        }
    }

    let buckets: Vec<TemperatureBucket> = samples
        .into_iter()
        .map(|(category, samples)| TemperatureBucket {
            category,
            days: samples.len(),
            demand: box_stats(&samples),
            samples,
        })
        .collect();

    debug!(
        "Temperature buckets: {:?}",
        buckets.iter().map(|b| (b.category, b.days)).collect::<Vec<_>>()
    );

    let [low_edge, medium_edge] = TEMPERATURE_BIN_EDGES;
    Ok(TemperatureOutput {
        bin_edges: [min, low_edge, medium_edge, max],
        buckets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{daily, fixture_datasets};

    #[test]
    fn test_buckets_in_fixed_order() {
        let days = vec![
            daily((2011, 1, 1), 0.9, 50, 150, true),
            daily((2011, 1, 2), 0.0, 10, 20, true),
            daily((2011, 1, 3), 0.33, 20, 20, true),
            daily((2011, 1, 4), 0.5, 30, 70, true),
        ];
        let output = temperature_effect(&days).unwrap();

        let order: Vec<TemperatureCategory> = output.buckets.iter().map(|b| b.category).collect();
        assert_eq!(
            order,
            vec![
                TemperatureCategory::Low,
                TemperatureCategory::Medium,
                TemperatureCategory::High
            ]
        );

        let counts: Vec<usize> = output.buckets.iter().map(|b| b.days).collect();
        assert_eq!(counts, vec![2, 1, 1]);
        assert_eq!(output.buckets[0].samples, vec![30.0, 40.0]);
        assert_eq!(output.buckets[2].demand.as_ref().unwrap().median, 200.0);
    }

    #[test]
    fn test_bin_edges_use_data_extremes_and_fixed_thresholds() {
        let days = vec![
            daily((2011, 1, 1), 0.1, 1, 1, true),
            daily((2011, 1, 2), 0.2, 1, 1, true),
        ];
        let output = temperature_effect(&days).unwrap();

        assert_eq!(output.bin_edges, [0.1, 0.33, 0.66, 0.2]);
        // empty bands are still reported
        assert_eq!(output.buckets.len(), 3);
        assert_eq!(output.buckets[1].days, 0);
        assert_eq!(output.buckets[1].demand, None);
        assert_eq!(output.buckets[2].days, 0);
    }

    #[test]
    fn test_fixture_distribution() {
        let datasets = fixture_datasets();
        let output = temperature_effect(datasets.daily.records()).unwrap();

        let counts: Vec<usize> = output.buckets.iter().map(|b| b.days).collect();
        assert_eq!(counts, vec![3, 3, 2]);
        assert_eq!(output.bin_edges[0], 0.196364);
        assert_eq!(output.bin_edges[3], 0.7175);

        let high = output.buckets[2].demand.as_ref().unwrap();
        assert_eq!(high.median, 4555.0);
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        let err = temperature_effect(&[]).unwrap_err();
        assert!(matches!(err, ComputeError::EmptyData(_)));
    }
}
