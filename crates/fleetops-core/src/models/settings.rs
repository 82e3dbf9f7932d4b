use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Settings key for the system-wide amount earned per delivered order.
pub const PER_ORDER_AMOUNT_KEY: &str = "per_order_amount";

/// One row of the shared key/value settings store. Values are stored as text;
/// typed accessors live on the settings repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SystemSetting {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerOrderRateResponse {
    pub rate: Decimal,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePerOrderRateRequest {
    pub rate: Decimal,
}
