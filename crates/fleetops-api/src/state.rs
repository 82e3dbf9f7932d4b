//! Application state shared across handlers.

use std::sync::Arc;

use axum::extract::FromRef;
use fleetops_core::Config;
use fleetops_db::{
    DailyUploadRepository, RiderAssignmentRepository, RiderOrderRepository, SettingsRepository,
};
use sqlx::PgPool;

/// Database pool plus the repositories the handlers and the ingestion
/// service work through.
#[derive(Clone)]
pub struct DbState {
    pub pool: PgPool,
    pub uploads: DailyUploadRepository,
    pub rider_orders: RiderOrderRepository,
    pub assignments: RiderAssignmentRepository,
    pub settings: SettingsRepository,
}

impl DbState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            uploads: DailyUploadRepository::new(pool.clone()),
            rider_orders: RiderOrderRepository::new(pool.clone()),
            assignments: RiderAssignmentRepository::new(pool.clone()),
            settings: SettingsRepository::new(pool.clone()),
            pool,
        }
    }
}

/// Limits applied to uploaded statement files, lifted out of [`Config`] so the
/// ingestion service does not read configuration mid-request.
#[derive(Clone, Debug)]
pub struct SheetLimits {
    pub max_file_size: usize,
    pub allowed_extensions: Vec<String>,
}

/// Main application state: aggregates sub-states for dependency injection.
#[derive(Clone)]
pub struct AppState {
    pub db: DbState,
    pub sheets: SheetLimits,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, pool: PgPool) -> Self {
        let sheets = SheetLimits {
            max_file_size: config.max_sheet_size_bytes(),
            allowed_extensions: config.sheet_allowed_extensions().to_vec(),
        };

        Self {
            db: DbState::new(pool),
            sheets,
            config,
        }
    }
}

impl FromRef<Arc<AppState>> for DbState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.db.clone()
    }
}

impl FromRef<Arc<AppState>> for SheetLimits {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.sheets.clone()
    }
}

// Handlers hold the state across await points; keep it Send + Sync.
fn _assert_app_state_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AppState>();
}
