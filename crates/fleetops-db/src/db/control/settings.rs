use std::str::FromStr;

use fleetops_core::models::{PER_ORDER_AMOUNT_KEY, SystemSetting};
use fleetops_core::AppError;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};

const RATE_VALUE_SQL: &str = "SELECT value FROM system_settings WHERE key = $1";

/// Key/value settings shared with the rest of the back office. This service
/// cares about a single key: the per-order payout rate (stored as text,
/// parsed to a decimal here).
#[derive(Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Current per-order rate.
    #[tracing::instrument(skip(self), fields(db.table = "system_settings", db.operation = "select"))]
    pub async fn per_order_rate(&self) -> Result<Decimal, AppError> {
        let value = sqlx::query_scalar::<Postgres, String>(RATE_VALUE_SQL)
            .bind(PER_ORDER_AMOUNT_KEY)
            .fetch_optional(&self.pool)
            .await?;

        parse_rate(value)
    }

    /// Same read on an ingestion transaction: the rate a run uses is the one
    /// visible to that run's snapshot, captured once before the row loop.
    pub async fn per_order_rate_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Decimal, AppError> {
        let value = sqlx::query_scalar::<Postgres, String>(RATE_VALUE_SQL)
            .bind(PER_ORDER_AMOUNT_KEY)
            .fetch_optional(&mut **tx)
            .await?;

        parse_rate(value)
    }

    /// Set the per-order rate, creating the setting on first write.
    #[tracing::instrument(skip(self), fields(db.table = "system_settings", db.operation = "upsert"))]
    pub async fn set_per_order_rate(&self, rate: Decimal) -> Result<SystemSetting, AppError> {
        let setting = sqlx::query_as::<Postgres, SystemSetting>(
            r#"
            INSERT INTO system_settings (key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(PER_ORDER_AMOUNT_KEY)
        .bind(rate.to_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(setting)
    }
}

/// An absent or malformed rate is a client-correctable condition: uploads are
/// refused with a 400 until an administrator sets a usable value.
fn parse_rate(value: Option<String>) -> Result<Decimal, AppError> {
    let value =
        value.ok_or_else(|| AppError::BadRequest("Per-order rate is not configured".to_string()))?;

    Decimal::from_str(value.trim()).map_err(|_| {
        AppError::BadRequest(format!(
            "Per-order rate setting is not a valid number: {value}"
        ))
    })
}
