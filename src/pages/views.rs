use common::{
    ColumnSummary, HourlyOutput, OverviewOutput, SeasonalOutput, TablePreview, TemperatureOutput,
    UserComparisonOutput, ViewKind, ViewOutput,
};
use compute::ComputeError;
use maud::{html, Markup};

use super::charts;

/// Section heading shown above each view.
pub fn heading(kind: ViewKind) -> &'static str {
    match kind {
        ViewKind::Overview => "Data Overview",
        ViewKind::TemperatureEffect => "Pengaruh Suhu terhadap Permintaan Penyewaan Sepeda",
        ViewKind::HourlyPattern => "Pola Penggunaan per Jam dalam Sehari Berdasarkan Tipe Hari",
        ViewKind::SeasonalTrend => "Tren Musiman dalam Penggunaan Layanan",
        ViewKind::UserComparison => "Perbandingan Pengguna Kasual dan Terdaftar",
    }
}

pub fn render(output: &ViewOutput) -> Markup {
    let content = match output {
        ViewOutput::Overview(overview) => overview_content(overview),
        ViewOutput::Temperature(temperature) => temperature_content(temperature),
        ViewOutput::Hourly(hourly) => hourly_content(hourly),
        ViewOutput::Seasonal(seasonal) => seasonal_content(seasonal),
        ViewOutput::UserComparison(users) => users_content(users),
    };

    html! {
        h2 { (heading(output.kind())) }
        (content)
    }
}

/// Replaces the content of a view that could not be computed.
pub fn render_error(kind: ViewKind, error: &ComputeError) -> Markup {
    let reason = match error {
        ComputeError::EmptyData(_) => "Data tidak cukup untuk analisis ini.",
        _ => "Terjadi kesalahan saat mengolah data.",
    };

    html! {
        h2 { (heading(kind)) }
        div class="view-error" role="alert" {
            p { strong { "Analisis tidak dapat ditampilkan. " } (reason) }
            p class="detail" { (error.to_string()) }
        }
    }
}

fn preview_table(table: &TablePreview) -> Markup {
    html! {
        table class="data" {
            thead {
                tr {
                    @for column in &table.columns {
                        th { (column) }
                    }
                }
            }
            tbody {
                @for row in &table.rows {
                    tr {
                        @for cell in row {
                            td { (cell) }
                        }
                    }
                }
            }
        }
    }
}

fn stat(value: Option<f64>) -> String {
    value.map_or_else(|| "NaN".to_string(), |v| format!("{:.6}", v))
}

/// Statistics as rows and columns as columns, like a `describe` table.
fn summary_table(summaries: &[ColumnSummary]) -> Markup {
    let rows: [(&str, fn(&ColumnSummary) -> String); 8] = [
        ("count", |s| format!("{:.6}", s.count as f64)),
        ("mean", |s| stat(s.mean)),
        ("std", |s| stat(s.std)),
        ("min", |s| stat(s.min)),
        ("25%", |s| stat(s.q1)),
        ("50%", |s| stat(s.median)),
        ("75%", |s| stat(s.q3)),
        ("max", |s| stat(s.max)),
    ];

    html! {
        table class="data summary" {
            thead {
                tr {
                    th {}
                    @for summary in summaries {
                        th { (summary.column) }
                    }
                }
            }
            tbody {
                @for (name, value) in rows {
                    tr {
                        th { (name) }
                        @for summary in summaries {
                            td { (value(summary)) }
                        }
                    }
                }
            }
        }
    }
}

fn overview_content(output: &OverviewOutput) -> Markup {
    html! {
        p class="meta" {
            (output.daily_rows) " hari, " (output.hourly_rows) " catatan per jam"
            @if let Some((first, last)) = output.date_range {
                " (" (first) " s.d. " (last) ")"
            }
        }
        h3 { "Dataset Harian" }
        (preview_table(&output.daily_preview))
        h3 { "Dataset Per Jam" }
        (preview_table(&output.hourly_preview))
        hr;
        h3 { "Statistik Deskriptif" }
        (summary_table(&output.daily_summary))
    }
}

fn temperature_content(output: &TemperatureOutput) -> Markup {
    let [min, low, medium, max] = output.bin_edges;
    html! {
        p class="meta" {
            "Batas kategori suhu: " (format!("{:.4}", min)) ", " (low) ", " (medium) ", "
            (format!("{:.4}", max))
        }
        h3 { "Distribusi Kategori Suhu" }
        (charts::temperature_distribution(output))
        (charts::temperature_demand(output))
        table class="data" {
            thead {
                tr {
                    th { "Kategori Suhu" }
                    th { "Hari" }
                    th { "Q1" }
                    th { "Median" }
                    th { "Q3" }
                    th { "Outlier" }
                }
            }
            tbody {
                @for bucket in &output.buckets {
                    tr {
                        td { (bucket.category.label()) }
                        td { (bucket.days) }
                        @if let Some(demand) = &bucket.demand {
                            td { (demand.q1) }
                            td { (demand.median) }
                            td { (demand.q3) }
                            td { (demand.outliers.len()) }
                        } @else {
                            td colspan="4" { "-" }
                        }
                    }
                }
            }
        }
    }
}

fn hourly_content(output: &HourlyOutput) -> Markup {
    html! {
        (charts::hourly_usage(output))
    }
}

fn seasonal_content(output: &SeasonalOutput) -> Markup {
    html! {
        (charts::monthly_usage(output))
    }
}

fn users_content(output: &UserComparisonOutput) -> Markup {
    html! {
        (charts::user_totals(output))
        (charts::user_shares(output))
        ul class="shares" {
            @for share in &output.shares {
                li { (share.user_type.label()) ": " (share.total) " (" (share.percentage_label()) ")" }
            }
        }
    }
}
