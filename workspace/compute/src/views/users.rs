use common::{UserComparisonOutput, UserShare, UserType};
use model::DailyRecord;
use tracing::{debug, instrument};

use crate::error::{ComputeError, Result};

/// Total casual and registered rentals and their share of the combined total.
///
/// Sums the two user columns directly; `cnt` is not consulted.
#[instrument(skip(days), fields(rows = days.len()))]
pub fn user_comparison(days: &[DailyRecord]) -> Result<UserComparisonOutput> {
    let casual: u64 = days.iter().map(|day| u64::from(day.casual)).sum();
    let registered: u64 = days.iter().map(|day| u64::from(day.registered)).sum();
    let combined = casual + registered;

    if combined == 0 {
        return Err(ComputeError::EmptyData(
            "no casual or registered rentals to compare".to_string(),
        ));
    }

    debug!(casual, registered, "Summed rentals per user type");

    let share = |user_type, total: u64| UserShare {
        user_type,
        total,
        percentage: total as f64 * 100.0 / combined as f64,
    };

    Ok(UserComparisonOutput {
        shares: [
            share(UserType::Casual, casual),
            share(UserType::Registered, registered),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{daily, fixture_datasets};

    #[test]
    fn test_thirty_seventy_split() {
        let days = vec![
            daily((2011, 1, 1), 0.3, 10, 30, false),
            daily((2011, 1, 2), 0.3, 20, 40, true),
        ];
        let output = user_comparison(&days).unwrap();

        let [casual, registered] = &output.shares;
        assert_eq!(casual.user_type, UserType::Casual);
        assert_eq!(casual.total, 30);
        assert_eq!(registered.total, 70);
        assert_eq!(casual.rounded_percentage(), 30.0);
        assert_eq!(registered.rounded_percentage(), 70.0);
        assert_eq!(casual.percentage_label(), "30.0%");
        assert_eq!(registered.percentage_label(), "70.0%");
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let datasets = fixture_datasets();
        let output = user_comparison(datasets.daily.records()).unwrap();

        assert_eq!(output.combined_total(), 19096);
        assert_eq!(output.shares[0].total, 5376);
        assert_eq!(output.shares[1].total, 13720);

        let rounded: f64 = output.shares.iter().map(|s| s.rounded_percentage()).sum();
        assert!((rounded - 100.0).abs() <= 0.1);
    }

    #[test]
    fn test_ignores_cnt_column() {
        let mut day = daily((2011, 1, 1), 0.3, 1, 3, true);
        day.count = 1000;
        let output = user_comparison(&[day]).unwrap();
        assert_eq!(output.combined_total(), 4);
    }

    #[test]
    fn test_zero_total_is_an_error() {
        let days = vec![daily((2011, 1, 1), 0.3, 0, 0, true)];
        let err = user_comparison(&days).unwrap_err();
        assert!(matches!(err, ComputeError::EmptyData(_)));
    }
}
