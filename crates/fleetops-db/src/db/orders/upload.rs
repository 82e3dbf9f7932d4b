use chrono::{NaiveDate, Utc};
use fleetops_core::models::{DailyOrderUpload, UploadStatus};
use fleetops_core::AppError;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

/// Repository for upload run metadata.
///
/// A run's record is created in `processing` state inside the run transaction
/// and stamped `processed` or `failed` by the same transaction, so committed
/// rows never show `processing`.
#[derive(Clone)]
pub struct DailyUploadRepository {
    pool: PgPool,
}

impl DailyUploadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert the metadata record for a new ingestion run with zeroed totals.
    pub async fn create_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        file_name: &str,
        company_id: i64,
        store_id: Option<i64>,
        order_date: NaiveDate,
    ) -> Result<DailyOrderUpload, AppError> {
        let now = Utc::now();
        let upload = sqlx::query_as::<Postgres, DailyOrderUpload>(
            r#"
            INSERT INTO daily_order_uploads (
                id, file_name, company_id, store_id, order_date,
                status, total_riders, total_orders, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, 0, 0, $7, $7)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(file_name)
        .bind(company_id)
        .bind(store_id)
        .bind(order_date)
        .bind(UploadStatus::Processing)
        .bind(now)
        .fetch_one(&mut **tx)
        .await?;

        Ok(upload)
    }

    /// Stamp the run outcome. Totals are whatever the row loop accumulated; a
    /// failed run keeps them at zero.
    pub async fn finalize_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        status: UploadStatus,
        total_riders: i32,
        total_orders: i64,
    ) -> Result<DailyOrderUpload, AppError> {
        let upload = sqlx::query_as::<Postgres, DailyOrderUpload>(
            r#"
            UPDATE daily_order_uploads
            SET status = $2, total_riders = $3, total_orders = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(total_riders)
        .bind(total_orders)
        .fetch_one(&mut **tx)
        .await?;

        Ok(upload)
    }

    #[tracing::instrument(skip(self), fields(db.table = "daily_order_uploads", db.operation = "select", db.record_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<DailyOrderUpload>, AppError> {
        let upload = sqlx::query_as::<Postgres, DailyOrderUpload>(
            "SELECT * FROM daily_order_uploads WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(upload)
    }

    #[tracing::instrument(skip(self), fields(db.table = "daily_order_uploads", db.operation = "select"))]
    pub async fn list(
        &self,
        company_id: Option<i64>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<DailyOrderUpload>, AppError> {
        let uploads = match company_id {
            None => {
                sqlx::query_as::<Postgres, DailyOrderUpload>(
                    "SELECT * FROM daily_order_uploads ORDER BY created_at DESC LIMIT $1 OFFSET $2",
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
            Some(cid) => {
                sqlx::query_as::<Postgres, DailyOrderUpload>(
                    "SELECT * FROM daily_order_uploads WHERE company_id = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
                )
                .bind(cid)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(uploads)
    }

    /// Delete an upload; its earnings rows go with it via cascade.
    #[tracing::instrument(skip(self), fields(db.table = "daily_order_uploads", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM daily_order_uploads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}
