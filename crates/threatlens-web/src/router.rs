//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{
    alerts::alerts_page,
    dashboard::dashboard,
    panels::{anomaly_submit, hybrid_submit},
    reports::reports_page,
    settings::settings_page,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(dashboard))
        .route("/alerts", get(alerts_page))
        .route("/reports", get(reports_page))
        .route("/settings", get(settings_page))

        // Live-analysis panel submissions
        .route("/panel/hybrid", post(hybrid_submit))
        .route("/panel/anomaly", post(anomaly_submit))

        // Static files
        .nest_service("/static", ServeDir::new("static"))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
