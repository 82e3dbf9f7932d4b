use fleetops_core::AppError;
use sqlx::{PgPool, Postgres, Transaction};

const FIND_RIDER_SQL: &str = r#"
    SELECT rider_id FROM rider_assignments
    WHERE company_id = $1 AND external_rider_id = $2 AND is_active
    ORDER BY assigned_at DESC
    LIMIT 1
"#;

/// Read-only lookups against the assignment table administered by the wider
/// back office. This service never writes assignments.
#[derive(Clone)]
pub struct RiderAssignmentRepository {
    pool: PgPool,
}

impl RiderAssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resolve an external rider code to an internal rider id. Only active
    /// assignments count; when several are active for one code, the newest
    /// wins.
    #[tracing::instrument(skip(self), fields(db.table = "rider_assignments", db.operation = "select"))]
    pub async fn find_rider(
        &self,
        company_id: i64,
        external_rider_id: &str,
    ) -> Result<Option<i64>, AppError> {
        let rider_id = sqlx::query_scalar::<Postgres, i64>(FIND_RIDER_SQL)
            .bind(company_id)
            .bind(external_rider_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(rider_id)
    }

    /// Same lookup on an ingestion transaction, so every row in a run resolves
    /// against the same snapshot of assignments.
    pub async fn find_rider_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        company_id: i64,
        external_rider_id: &str,
    ) -> Result<Option<i64>, AppError> {
        let rider_id = sqlx::query_scalar::<Postgres, i64>(FIND_RIDER_SQL)
            .bind(company_id)
            .bind(external_rider_id)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(rider_id)
    }
}
