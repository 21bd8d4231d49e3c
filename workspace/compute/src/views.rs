//! One pure function per dashboard view.
//!
//! Every function reads the loaded datasets and returns a fresh output;
//! nothing here mutates or caches state between renders.

pub mod hourly;
pub mod overview;
pub mod seasonal;
pub mod temperature;
pub mod users;

pub use hourly::hourly_pattern;
pub use overview::data_overview;
pub use seasonal::seasonal_trend;
pub use temperature::temperature_effect;
pub use users::user_comparison;
