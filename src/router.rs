use crate::handlers::{dashboard::dashboard, health::health_check};
use crate::schemas::AppState;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let timeout = state.settings.request_timeout();

    Router::new()
        .route("/", get(dashboard))
        .route("/health", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
