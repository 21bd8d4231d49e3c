use common::{ViewKind, RECOMMENDATIONS};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::PageOptions;

pub const PAGE_TITLE: &str = "Dashboard Bike Sharing";
pub const MAIN_HEADING: &str = "Dashboard Analisis Data Layanan Bike Sharing";
const INTRO: &str = "Dashboard ini menyajikan analisis data layanan bike sharing, mengeksplorasi \
faktor-faktor yang memengaruhi permintaan penyewaan sepeda, dan memberikan wawasan bisnis.";
pub const RECOMMENDATION_BUTTON: &str = "Tampilkan Tindakan Lanjutan";

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

const STYLE: &str = "
body { margin: 0; display: flex; font-family: sans-serif; color: #262730; }
.sidebar { width: 18rem; min-height: 100vh; padding: 1.5rem; background: #f0f2f6; }
.content { flex: 1; padding: 1.5rem 3rem; overflow-x: auto; }
table.data { border-collapse: collapse; margin-bottom: 1rem; font-size: 0.85rem; }
table.data th, table.data td { border: 1px solid #ddd; padding: 0.25rem 0.5rem; text-align: right; }
.view-error { padding: 1rem; background: #ffe6e6; color: #7d1a1a; border-radius: 0.25rem; }
.view-error .detail { font-family: monospace; font-size: 0.8rem; }
";

/// Whole dashboard page around an already rendered view section.
pub fn dashboard_page(options: &PageOptions, view_section: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="id" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (PAGE_TITLE) }
                script src=(PLOTLY_CDN) {}
                style { (PreEscaped(STYLE)) }
            }
            body {
                aside class="sidebar" {
                    (sidebar(options.active))
                }
                main class="content" {
                    h1 { (MAIN_HEADING) }
                    p { (INTRO) }
                    section id="view" {
                        (view_section)
                    }
                    @if options.show_recommendations {
                        (recommendations())
                    }
                }
            }
        }
    }
}

/// Radio group of views plus the recommendation trigger.
///
/// The trigger keeps the active view so pressing it re-renders the same view.
fn sidebar(active: ViewKind) -> Markup {
    html! {
        h2 { "Navigasi" }
        form method="get" action="/" id="view-form" {
            fieldset {
                legend { "Pilih Analisis:" }
                @for kind in ViewKind::ALL {
                    label {
                        input type="radio" name="view" value=(kind.slug())
                            checked[kind == active] onchange="this.form.submit()";
                        " " (kind.label())
                    }
                    br;
                }
            }
            noscript { button type="submit" { "Tampilkan" } }
        }
        hr;
        form method="get" action="/" id="recommendation-form" {
            input type="hidden" name="view" value=(active.slug());
            input type="hidden" name="recommendations" value="true";
            button type="submit" { (RECOMMENDATION_BUTTON) }
        }
    }
}

fn recommendations() -> Markup {
    html! {
        section id="recommendations" {
            h2 { "Tindakan Lanjutan" }
            p { strong { "Tindakan lanjutan berdasarkan hasil analisis data" } }
            ol {
                @for recommendation in RECOMMENDATIONS {
                    li { (recommendation) }
                }
            }
        }
    }
}
