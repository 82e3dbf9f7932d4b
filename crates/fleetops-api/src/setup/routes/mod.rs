//! Router assembly and the middleware stack.

mod domains;
mod health;

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use fleetops_core::Config;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

use crate::api_doc::ApiDoc;
use crate::state::AppState;

// Multipart framing and the companion form fields ride on top of the sheet
// size limit.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the full router: API routes, docs, and the middleware stack.
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    let router = Router::new()
        .merge(health::health_routes(state.clone()))
        .merge(domains::order_routes(state.clone()))
        .merge(domains::settings_routes(state))
        .route("/api/openapi.json", get(openapi_spec))
        .merge(RapiDoc::new("/api/openapi.json").path("/docs"))
        .layer(ConcurrencyLimitLayer::new(config.http_concurrency_limit()))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs(),
        )))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(
            config.max_sheet_size_bytes() + MULTIPART_OVERHEAD_BYTES,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}

async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let origins = config.cors_origins();
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    let cors = if origins.iter().any(|origin| origin == "*") {
        tracing::warn!("CORS is configured to allow any origin");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers([ACCEPT, CONTENT_TYPE])
    } else {
        let parsed = origins
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| anyhow::anyhow!("Invalid CORS origin: {err}"))?;

        CorsLayer::new()
            .allow_origin(parsed)
            .allow_methods(methods)
            .allow_headers([ACCEPT, CONTENT_TYPE])
            .allow_credentials(true)
    };

    Ok(cors)
}
