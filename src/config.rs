use anyhow::{Context, Result};
use config::{Config, Environment, File};
use model::{DatasetPaths, Datasets};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::schemas::AppState;

/// Name (without extension) of the optional configuration file looked up in
/// the working directory.
const DEFAULT_CONFIG_FILE: &str = "dashboard";

/// Prefix of environment variables that override file settings.
const ENV_PREFIX: &str = "DASHBOARD";

/// Runtime settings of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Directory holding the two CSV files
    pub data_dir: PathBuf,
    pub daily_file: String,
    pub hourly_file: String,
    /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
    pub bind_address: String,
    /// Rows shown by the overview previews
    pub preview_rows: usize,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            daily_file: "day.csv".to_string(),
            hourly_file: "hour.csv".to_string(),
            bind_address: "0.0.0.0:3000".to_string(),
            preview_rows: compute::DEFAULT_PREVIEW_ROWS,
            request_timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Layers built-in defaults, then the configuration file, then
    /// `DASHBOARD_*` environment variables.
    ///
    /// Without an explicit path a missing `dashboard.toml` is not an error;
    /// an explicit path must exist.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Settings::default();

        let file = match config_path {
            Some(path) => {
                debug!("Using configuration file {}", path.display());
                File::from(path).required(true)
            }
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = Config::builder()
            .set_default("data_dir", defaults.data_dir.to_string_lossy().into_owned())?
            .set_default("daily_file", defaults.daily_file)?
            .set_default("hourly_file", defaults.hourly_file)?
            .set_default("bind_address", defaults.bind_address)?
            .set_default("preview_rows", defaults.preview_rows as i64)?
            .set_default("request_timeout_secs", defaults.request_timeout_secs as i64)?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize::<Settings>()
            .context("Invalid configuration")?;

        debug!(?settings, "Configuration loaded");
        Ok(settings)
    }

    /// Applies command line values on top of the loaded configuration.
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, bind_address: Option<String>) -> Self {
        if let Some(data_dir) = data_dir {
            self.data_dir = data_dir;
        }
        if let Some(bind_address) = bind_address {
            self.bind_address = bind_address;
        }
        self
    }

    pub fn dataset_paths(&self) -> DatasetPaths {
        DatasetPaths::new(&self.data_dir, &self.daily_file, &self.hourly_file)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Loads both datasets and builds the shared application state.
///
/// Any load failure is returned before a listener is bound.
#[instrument(skip(settings), fields(data_dir = %settings.data_dir.display()))]
pub fn initialize_app_state(settings: Settings) -> Result<AppState> {
    let paths = settings.dataset_paths();
    info!(
        "Loading datasets from {} and {}",
        paths.daily.display(),
        paths.hourly.display()
    );
    let datasets = Datasets::load(&paths)
        .with_context(|| format!("Failed to load datasets from {}", settings.data_dir.display()))?;

    Ok(AppState {
        datasets: Arc::new(datasets),
        settings: Arc::new(settings),
    })
}
