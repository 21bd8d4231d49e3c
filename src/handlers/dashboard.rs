use axum::extract::{Query, State};
use compute::{compute_view, ViewContext};
use maud::Markup;
use tracing::{debug, error, instrument};

use crate::pages::{self, PageOptions};
use crate::schemas::{AppState, DashboardQuery};

/// Dashboard page
///
/// Renders exactly one view. A view that fails to compute is replaced by an
/// error message; the rest of the page and the status code are unaffected.
#[instrument(skip(state))]
pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Markup {
    let kind = query.view();
    let ctx = ViewContext::new(&state.datasets).with_preview_rows(state.settings.preview_rows);

    let section = match compute_view(kind, &ctx) {
        Ok(output) => {
            debug!("View {} computed", kind.slug());
            pages::views::render(&output)
        }
        Err(e) => {
            error!("Failed to compute view {}: {}", kind.slug(), e);
            pages::views::render_error(kind, &e)
        }
    };

    let options = PageOptions {
        active: kind,
        show_recommendations: query.show_recommendations(),
    };
    pages::layout::dashboard_page(&options, section)
}
