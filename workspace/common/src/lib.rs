//! Common types shared between the compute crate and the page renderer.
//! These structs describe what each dashboard view produces so the renderer
//! can draw tables and charts without knowing how the numbers were computed.

mod outputs;
mod views;

pub use outputs::{
    BoxStats, ColumnSummary, DayType, HourlyOutput, HourlyUsage, MonthlyUsage, OverviewOutput,
    SeasonalOutput, TablePreview, TemperatureBucket, TemperatureCategory, TemperatureOutput,
    UserComparisonOutput, UserShare, UserType, ViewOutput,
};
pub use views::{ParseViewKindError, ViewKind};

/// Static follow-up actions shown by the recommendation panel.
pub const RECOMMENDATIONS: [&str; 3] = [
    "Memaksimalkan ketersediaan sepeda pada jam-jam puncak dan musim dengan penggunaan tinggi.",
    "Meningkatkan promosi pada dan inovasi pada musim dingin untuk meningkatkan penggunaan.",
    "Membuat semacam program untuk menarik pengguna casual menjadi pelanggan (registered)",
];
