//! Health and readiness probes.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use sqlx::PgPool;

use crate::state::AppState;

const DB_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

pub fn health_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .with_state(state)
}

async fn database_reachable(pool: &PgPool) -> bool {
    let ping = sqlx::query("SELECT 1").execute(pool);
    matches!(tokio::time::timeout(DB_PROBE_TIMEOUT, ping).await, Ok(Ok(_)))
}

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let database_up = database_reachable(&state.db.pool).await;
    let status = if database_up {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(serde_json::json!({
            "status": if database_up { "healthy" } else { "degraded" },
            "database": if database_up { "up" } else { "down" },
        })),
    )
}

async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let ready = database_reachable(&state.db.pool).await;
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(serde_json::json!({
            "status": if ready { "ready" } else { "not_ready" },
        })),
    )
}
