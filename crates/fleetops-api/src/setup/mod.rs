//! Application setup: configuration validation, database, routes, server.

pub mod database;
pub mod routes;
pub mod server;
pub mod validation;

use std::sync::Arc;

use axum::Router;
use fleetops_core::Config;

use crate::state::AppState;
use crate::telemetry;

/// Wire the application together: validate the configuration, install
/// tracing, connect the database, and build the router.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router), anyhow::Error> {
    validation::validate_config(&config)?;

    telemetry::init_tracing();

    tracing::info!(
        environment = config.environment(),
        port = config.server_port(),
        "Starting fleetops-api"
    );

    let pool = database::setup_database(&config).await?;
    let state = Arc::new(AppState::new(config.clone(), pool));
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
