use chrono::{NaiveDate, Utc};
use fleetops_core::models::DailyRiderOrder;
use fleetops_core::AppError;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

/// Repository for per-rider earnings rows produced by ingestion runs.
#[derive(Clone)]
pub struct RiderOrderRepository {
    pool: PgPool,
}

impl RiderOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert one earnings row for a matched statement row. The earning is a
    /// snapshot computed by the caller from the rate captured at run start; it
    /// is never recomputed afterwards.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        upload_id: Uuid,
        company_id: i64,
        store_id: Option<i64>,
        rider_id: i64,
        rider_name: &str,
        external_rider_id: &str,
        row_number: i32,
        order_count: i32,
        per_order_amount: Decimal,
        total_earning: Decimal,
        order_date: NaiveDate,
    ) -> Result<DailyRiderOrder, AppError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let row = sqlx::query_as::<Postgres, DailyRiderOrder>(
            r#"
            INSERT INTO daily_rider_orders (
                id, upload_id, company_id, store_id, rider_id,
                rider_name, external_rider_id, row_number, order_count,
                per_order_amount, total_earning, order_date, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(upload_id)
        .bind(company_id)
        .bind(store_id)
        .bind(rider_id)
        .bind(rider_name)
        .bind(external_rider_id)
        .bind(row_number)
        .bind(order_count)
        .bind(per_order_amount)
        .bind(total_earning)
        .bind(order_date)
        .bind(now)
        .fetch_one(&mut **tx)
        .await?;

        Ok(row)
    }

    /// Earnings rows of one upload, in the order the statement listed them.
    #[tracing::instrument(skip(self), fields(db.table = "daily_rider_orders", db.operation = "select", upload_id = %upload_id))]
    pub async fn list_by_upload(&self, upload_id: Uuid) -> Result<Vec<DailyRiderOrder>, AppError> {
        let rows = sqlx::query_as::<Postgres, DailyRiderOrder>(
            "SELECT * FROM daily_rider_orders WHERE upload_id = $1 ORDER BY row_number ASC",
        )
        .bind(upload_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
