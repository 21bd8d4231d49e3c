use anyhow::{Context, Result};
use model::{Dataset, Datasets, Record};
use tracing::{error, info, warn};

use crate::config::Settings;

/// Loads both datasets and logs what was read.
pub fn inspect(settings: &Settings) -> Result<()> {
    let paths = settings.dataset_paths();
    let datasets = match Datasets::load(&paths) {
        Ok(datasets) => datasets,
        Err(e) => {
            error!("Failed to load datasets: {}", e);
            return Err(e).context("Failed to load datasets");
        }
    };

    report(&datasets.daily);
    report(&datasets.hourly);
    Ok(())
}

fn report<R: Record>(dataset: &Dataset<R>) {
    info!("{}: {} rows", dataset.name(), dataset.len());

    match dataset.date_range() {
        Some((first, last)) => info!("{}: dates from {} to {}", dataset.name(), first, last),
        None => warn!("{}: no rows", dataset.name()),
    }

    let inconsistent = dataset.inconsistent_counts();
    if inconsistent == 0 {
        info!("{}: cnt equals casual + registered on every row", dataset.name());
    } else {
        warn!(
            "{}: {} rows where cnt differs from casual + registered",
            dataset.name(),
            inconsistent
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_inspect_fixture_directory() {
        let settings = Settings::default().with_overrides(
            Some(PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/workspace/model/fixtures"))),
            None,
        );
        assert!(inspect(&settings).is_ok());
    }

    #[test]
    fn test_inspect_missing_directory_fails() {
        let settings = Settings::default().with_overrides(Some(PathBuf::from("/nonexistent")), None);
        assert!(inspect(&settings).is_err());
    }
}
