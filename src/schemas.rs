use common::ViewKind;
use model::Datasets;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::Settings;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Both datasets, loaded once at startup and never mutated
    pub datasets: Arc<Datasets>,
    pub settings: Arc<Settings>,
}

/// Query parameters of the dashboard page
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Active view; the overview when absent
    pub view: Option<ViewKind>,
    /// Momentary trigger for the recommendation panel
    pub recommendations: Option<bool>,
}

impl DashboardQuery {
    pub fn view(&self) -> ViewKind {
        self.view.unwrap_or_default()
    }

    pub fn show_recommendations(&self) -> bool {
        self.recommendations.unwrap_or(false)
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Rows in the daily dataset
    pub daily_rows: usize,
    /// Rows in the hourly dataset
    pub hourly_rows: usize,
}
