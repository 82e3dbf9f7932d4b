use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maps a company-scoped external rider code to an internal rider. Assignments
/// accumulate over time; only the newest active one per `(company_id,
/// external_rider_id)` is authoritative for ingestion lookups. This service
/// never writes assignments - they are administered by the wider back office.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct RiderAssignment {
    pub id: i64,
    pub company_id: i64,
    pub rider_id: i64,
    pub external_rider_id: String,
    pub is_active: bool,
    pub assigned_at: DateTime<Utc>,
}
