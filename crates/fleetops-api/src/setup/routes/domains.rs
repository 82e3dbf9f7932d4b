//! Domain route tables.

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Statement ingestion and upload-run inspection.
pub fn order_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/orders/upload-daily",
            post(handlers::upload_daily::upload_daily_orders),
        )
        .route("/orders/uploads", get(handlers::uploads::list_uploads))
        .route(
            "/orders/uploads/{id}",
            get(handlers::uploads::get_upload).delete(handlers::uploads::delete_upload),
        )
        .route(
            "/orders/uploads/{id}/rows",
            get(handlers::uploads::list_upload_rows),
        )
        .with_state(state)
}

/// Per-order rate configuration.
pub fn settings_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/settings/per-order-rate",
            get(handlers::settings::get_per_order_rate),
        )
        .route(
            "/settings/per-order-rate",
            put(handlers::settings::update_per_order_rate),
        )
        .with_state(state)
}
