use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One matched spreadsheet row: a rider's order count for a day, priced at the
/// per-order rate that was active when the upload ran. `total_earning` is a
/// snapshot (`order_count * per_order_amount`) and is never recomputed when the
/// rate later changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct DailyRiderOrder {
    pub id: Uuid,
    pub upload_id: Uuid,
    pub company_id: i64,
    pub store_id: Option<i64>,
    pub rider_id: i64,
    /// Display name from the sheet; empty when the sheet has no name column.
    pub rider_name: String,
    /// External identifier exactly as given in the sheet (untrimmed).
    pub external_rider_id: String,
    /// 1-based sheet row this record came from, counting the header row.
    pub row_number: i32,
    pub order_count: i32,
    pub per_order_amount: Decimal,
    pub total_earning: Decimal,
    pub order_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RiderOrderResponse {
    pub id: Uuid,
    pub upload_id: Uuid,
    pub rider_id: i64,
    pub rider_name: String,
    pub external_rider_id: String,
    pub row_number: i32,
    pub order_count: i32,
    pub per_order_amount: Decimal,
    pub total_earning: Decimal,
    pub order_date: NaiveDate,
}

impl From<DailyRiderOrder> for RiderOrderResponse {
    fn from(row: DailyRiderOrder) -> Self {
        RiderOrderResponse {
            id: row.id,
            upload_id: row.upload_id,
            rider_id: row.rider_id,
            rider_name: row.rider_name,
            external_rider_id: row.external_rider_id,
            row_number: row.row_number,
            order_count: row.order_count,
            per_order_amount: row.per_order_amount,
            total_earning: row.total_earning,
            order_date: row.order_date,
        }
    }
}
