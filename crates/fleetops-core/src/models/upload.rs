use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle of one spreadsheet ingestion attempt.
///
/// `Processing` only exists inside the ingestion transaction; committed rows
/// are always `Processed` or `Failed`. There is no retry transition - a failed
/// upload means the client resubmits a new file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "daily_upload_status", rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Processing,
    Processed,
    Failed,
}

impl Display for UploadStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UploadStatus::Processing => write!(f, "processing"),
            UploadStatus::Processed => write!(f, "processed"),
            UploadStatus::Failed => write!(f, "failed"),
        }
    }
}

impl FromStr for UploadStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processing" => Ok(UploadStatus::Processing),
            "processed" => Ok(UploadStatus::Processed),
            "failed" => Ok(UploadStatus::Failed),
            _ => Err(anyhow::anyhow!("Invalid upload status: {}", s)),
        }
    }
}

/// One daily order-statement ingestion attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct DailyOrderUpload {
    pub id: Uuid,
    pub file_name: String,
    pub company_id: i64,
    pub store_id: Option<i64>,
    pub order_date: NaiveDate,
    pub status: UploadStatus,
    /// Matched rows, not distinct riders: a rider listed twice counts twice.
    pub total_riders: i32,
    pub total_orders: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Totals handed back by a completed ingestion run.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub upload_id: Uuid,
    pub total_riders: i32,
    pub total_orders: i64,
    pub order_date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyUploadResponse {
    pub id: Uuid,
    pub file_name: String,
    pub company_id: i64,
    pub store_id: Option<i64>,
    pub order_date: NaiveDate,
    pub status: UploadStatus,
    pub total_riders: i32,
    pub total_orders: i64,
    pub created_at: DateTime<Utc>,
}

impl From<DailyOrderUpload> for DailyUploadResponse {
    fn from(upload: DailyOrderUpload) -> Self {
        DailyUploadResponse {
            id: upload.id,
            file_name: upload.file_name,
            company_id: upload.company_id,
            store_id: upload.store_id,
            order_date: upload.order_date,
            status: upload.status,
            total_riders: upload.total_riders,
            total_orders: upload.total_orders,
            created_at: upload.created_at,
        }
    }
}
