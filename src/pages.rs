//! Server-rendered HTML of the dashboard.

pub mod charts;
pub mod layout;
pub mod views;

use common::ViewKind;

/// Per-request choices that shape the page around the view section.
#[derive(Debug, Clone, Copy)]
pub struct PageOptions {
    pub active: ViewKind,
    pub show_recommendations: bool,
}
