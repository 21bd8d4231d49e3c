//! Plotly figures rendered to inline HTML.
//!
//! Each chart gets a fixed div id so the same output renders to the same
//! markup on every request.

use common::{
    DayType, HourlyOutput, SeasonalOutput, TemperatureCategory, TemperatureOutput,
    UserComparisonOutput,
};
use maud::{Markup, PreEscaped};
use plotly::{
    common::{Mode, Title},
    layout::Axis,
    Bar, BoxPlot, Layout, Pie, Plot, Scatter,
};

fn axis(title: &str) -> Axis {
    Axis::new().title(Title::with_text(title))
}

fn layout(title: &str, x_title: &str, y_title: &str) -> Layout {
    Layout::new()
        .title(Title::with_text(title))
        .x_axis(axis(x_title))
        .y_axis(axis(y_title))
}

fn inline(plot: &Plot, div_id: &str) -> Markup {
    PreEscaped(plot.to_inline_html(Some(div_id)))
}

/// Number of days per temperature band.
pub fn temperature_distribution(output: &TemperatureOutput) -> Markup {
    let labels: Vec<&str> = output.buckets.iter().map(|b| b.category.label()).collect();
    let days: Vec<usize> = output.buckets.iter().map(|b| b.days).collect();

    let mut plot = Plot::new();
    plot.add_trace(Bar::new(labels, days).name("temp_category"));
    plot.set_layout(layout(
        "Distribusi Kategori Suhu",
        "Kategori Suhu",
        "Jumlah Hari",
    ));
    inline(&plot, "chart-temperature-distribution")
}

/// Spread of total rentals per temperature band, Low to High.
pub fn temperature_demand(output: &TemperatureOutput) -> Markup {
    let mut plot = Plot::new();
    for category in TemperatureCategory::ALL {
        let samples = output
            .buckets
            .iter()
            .find(|b| b.category == category)
            .map(|b| b.samples.clone())
            .unwrap_or_default();
        plot.add_trace(BoxPlot::<f64, f64>::new(samples).name(category.label()));
    }
    plot.set_layout(layout(
        "Jumlah Penyewaan Berdasarkan Kategori Suhu",
        "Kategori Suhu",
        "Jumlah Penyewaan",
    ));
    inline(&plot, "chart-temperature-demand")
}

/// One line per day type over the 24 hours.
pub fn hourly_usage(output: &HourlyOutput) -> Markup {
    let mut plot = Plot::new();
    for day_type in DayType::ALL {
        let (hours, means) = output.series(day_type);
        if hours.is_empty() {
            continue;
        }
        plot.add_trace(
            Scatter::new(hours, means)
                .mode(Mode::LinesMarkers)
                .name(day_type.label()),
        );
    }

    plot.set_layout(hourly_layout());
    inline(&plot, "chart-hourly-usage")
}

/// Every hour from 0 to 23 gets a tick, with or without data.
fn hourly_layout() -> Layout {
    let hours: Vec<f64> = (0..24).map(f64::from).collect();
    Layout::new()
        .title(Title::with_text("Rata-rata Penyewaan per Jam Berdasarkan Tipe Hari"))
        .x_axis(axis("Jam").tick_values(hours).range(vec![-0.5, 23.5]))
        .y_axis(axis("Rata-rata Jumlah Penyewaan"))
}

/// Mean daily rentals per month; months without data leave a gap.
pub fn monthly_usage(output: &SeasonalOutput) -> Markup {
    let months: Vec<&str> = output.months.iter().map(|m| m.month).collect();
    let means: Vec<Option<f64>> = output.months.iter().map(|m| m.mean_count).collect();

    let mut plot = Plot::new();
    plot.add_trace(Bar::new(months, means).name("cnt"));
    plot.set_layout(layout(
        "Rata-rata Penyewaan per Bulan",
        "Bulan",
        "Rata-rata Jumlah Penyewaan",
    ));
    inline(&plot, "chart-monthly-usage")
}

pub fn user_totals(output: &UserComparisonOutput) -> Markup {
    let labels: Vec<&str> = output.shares.iter().map(|s| s.user_type.label()).collect();
    let totals: Vec<u64> = output.shares.iter().map(|s| s.total).collect();

    let mut plot = Plot::new();
    plot.add_trace(Bar::new(labels, totals).name("Total Usage"));
    plot.set_layout(layout(
        "Total Penyewaan Berdasarkan Tipe Pengguna",
        "Tipe Pengguna",
        "Total Penyewaan",
    ));
    inline(&plot, "chart-user-totals")
}

/// Share of each user type, labelled with its one-decimal percentage.
pub fn user_shares(output: &UserComparisonOutput) -> Markup {
    let labels: Vec<String> = output
        .shares
        .iter()
        .map(|s| format!("{} {}", s.user_type.label(), s.percentage_label()))
        .collect();
    let totals: Vec<u64> = output.shares.iter().map(|s| s.total).collect();

    let mut plot = Plot::new();
    plot.add_trace(Pie::new(totals).labels(labels).text_info("label"));
    plot.set_layout(Layout::new().title(Title::with_text(
        "Persentase Penyewaan Berdasarkan Tipe Pengguna",
    )));
    inline(&plot, "chart-user-shares")
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::HourlyUsage;

    #[test]
    fn test_hourly_axis_ticks_every_hour() {
        let layout = serde_json::to_value(hourly_layout()).unwrap();

        let expected: Vec<f64> = (0..24).map(f64::from).collect();
        assert_eq!(layout["xaxis"]["tickvals"], serde_json::json!(expected));
    }

    #[test]
    fn test_hourly_chart_with_sparse_data() {
        let output = HourlyOutput {
            rows: vec![HourlyUsage {
                hour: 8,
                day_type: DayType::WorkingDay,
                mean_count: 200.0,
            }],
        };
        let markup = hourly_usage(&output).into_string();

        assert!(markup.contains("chart-hourly-usage"));
        assert!(markup.contains("Working Day"));
        assert!(!markup.contains("Weekend/Holiday"));
    }
}
