use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The analyses a user can pick from the sidebar.
///
/// Exactly one is active per render; the first variant is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ViewKind {
    #[default]
    Overview,
    TemperatureEffect,
    HourlyPattern,
    SeasonalTrend,
    UserComparison,
}

impl ViewKind {
    /// All views in sidebar order.
    pub const ALL: [ViewKind; 5] = [
        ViewKind::Overview,
        ViewKind::TemperatureEffect,
        ViewKind::HourlyPattern,
        ViewKind::SeasonalTrend,
        ViewKind::UserComparison,
    ];

    /// Label shown next to the radio button.
    pub fn label(self) -> &'static str {
        match self {
            ViewKind::Overview => "Data Overview",
            ViewKind::TemperatureEffect => "Pengaruh Suhu terhadap Permintaan",
            ViewKind::HourlyPattern => "Pola Penggunaan per Jam",
            ViewKind::SeasonalTrend => "Tren Musiman",
            ViewKind::UserComparison => "Perbandingan Pengguna",
        }
    }

    /// Identifier used in the query string.
    pub fn slug(self) -> &'static str {
        match self {
            ViewKind::Overview => "overview",
            ViewKind::TemperatureEffect => "temperature",
            ViewKind::HourlyPattern => "hourly",
            ViewKind::SeasonalTrend => "seasonal",
            ViewKind::UserComparison => "users",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a query value names no known view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view '{0}'")]
pub struct ParseViewKindError(pub String);

impl FromStr for ViewKind {
    type Err = ParseViewKindError;

    /// Accepts either the slug or the exact sidebar label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ViewKind::ALL
            .into_iter()
            .find(|kind| kind.slug().eq_ignore_ascii_case(trimmed) || kind.label() == trimmed)
            .ok_or_else(|| ParseViewKindError(s.to_string()))
    }
}

impl TryFrom<String> for ViewKind {
    type Error = ParseViewKindError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ViewKind> for &'static str {
    fn from(kind: ViewKind) -> Self {
        kind.slug()
    }
}
