//! Descriptive statistics over plain `f64` samples.

use common::{BoxStats, ColumnSummary};

/// Whisker reach in multiples of the interquartile range.
pub const WHISKER_IQR_FACTOR: f64 = 1.5;

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Quantile of an ascending slice, interpolating linearly between ranks.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Standard deviation with one degree of freedom removed.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((squares / (values.len() - 1) as f64).sqrt())
}

/// Median, quartiles, Tukey whiskers and outliers of a sample.
pub fn box_stats(values: &[f64]) -> Option<BoxStats> {
    let sorted = sorted(values);
    let q1 = quantile(&sorted, 0.25)?;
    let median = quantile(&sorted, 0.5)?;
    let q3 = quantile(&sorted, 0.75)?;

    let reach = WHISKER_IQR_FACTOR * (q3 - q1);
    let (low_fence, high_fence) = (q1 - reach, q3 + reach);

    let inside = sorted.iter().copied().filter(|v| *v >= low_fence && *v <= high_fence);
    let lower_whisker = inside.clone().next().unwrap_or(q1);
    let upper_whisker = inside.last().unwrap_or(q3);
    let outliers = sorted
        .iter()
        .copied()
        .filter(|v| *v < low_fence || *v > high_fence)
        .collect();

    Some(BoxStats {
        q1,
        median,
        q3,
        lower_whisker,
        upper_whisker,
        outliers,
    })
}

/// count, mean, std, min, quartiles and max of one column.
pub fn summarize(column: &str, values: &[f64]) -> ColumnSummary {
    let sorted = sorted(values);
    ColumnSummary {
        column: column.to_string(),
        count: sorted.len(),
        mean: mean(&sorted),
        std: sample_std(&sorted),
        min: sorted.first().copied(),
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted.last().copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantile_interpolates() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&values, 0.0), Some(1.0));
        assert_eq!(quantile(&values, 0.25), Some(1.75));
        assert_eq!(quantile(&values, 0.5), Some(2.5));
        assert_eq!(quantile(&values, 1.0), Some(4.0));
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn test_sample_std() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let std = sample_std(&values).unwrap();
        assert!((std - 2.138089935299395).abs() < 1e-12);
        assert_eq!(sample_std(&[1.0]), None);
    }

    #[test]
    fn test_box_stats_with_outlier() {
        let values = [10.0, 12.0, 11.0, 13.0, 12.0, 100.0];
        let stats = box_stats(&values).unwrap();

        assert_eq!(stats.median, 12.0);
        assert_eq!(stats.q1, 11.25);
        assert_eq!(stats.q3, 12.75);
        assert_eq!(stats.lower_whisker, 10.0);
        assert_eq!(stats.upper_whisker, 13.0);
        assert_eq!(stats.outliers, vec![100.0]);
    }

    #[test]
    fn test_box_stats_empty() {
        assert_eq!(box_stats(&[]), None);
    }

    #[test]
    fn test_summarize_matches_describe_layout() {
        let summary = summarize("cnt", &[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(summary.column, "cnt");
        assert_eq!(summary.count, 4);
        assert_eq!(summary.mean, Some(2.5));
        assert_eq!(summary.min, Some(1.0));
        assert_eq!(summary.q1, Some(1.75));
        assert_eq!(summary.median, Some(2.5));
        assert_eq!(summary.q3, Some(3.25));
        assert_eq!(summary.max, Some(4.0));

        let empty = summarize("cnt", &[]);
        assert_eq!(empty.count, 0);
        assert_eq!(empty.mean, None);
        assert_eq!(empty.std, None);
    }
}
