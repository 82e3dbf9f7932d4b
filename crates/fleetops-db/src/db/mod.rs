//! Database repositories for data access layer
//!
//! Repositories are organized into orders/ (upload runs and per-rider earnings
//! rows, owned by this service) and fleet/ plus control/ (rider assignments and
//! system settings, administered by the wider back office and only read here).
//! Each repository wraps a `PgPool` and exposes the queries one entity needs;
//! methods with a `_tx` suffix run on a caller-owned transaction.
//
// Upload runs and earnings rows
pub mod orders;
//
// Externally administered fleet data (read-only here)
pub mod fleet;
//
// System settings
pub mod control;
//
// Transaction utilities
pub mod transaction;

pub use control::SettingsRepository;
pub use fleet::RiderAssignmentRepository;
pub use orders::{DailyUploadRepository, RiderOrderRepository};
pub use transaction::TransactionGuard;
