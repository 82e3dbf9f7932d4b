//! Daily statement upload endpoint.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::Json;
use fleetops_core::models::UploadReceipt;
use utoipa::ToSchema;

use crate::error::{ErrorBody, HttpIngestError};
use crate::response::ApiResponse;
use crate::services::ingestion::DailyOrderIngestion;
use crate::state::AppState;
use crate::utils::upload::extract_daily_statement;

/// Multipart form for the statement upload. Documentation only; the handler
/// reads the raw multipart stream.
#[derive(ToSchema)]
pub struct DailyStatementForm {
    /// Spreadsheet file: csv, xlsx, or xls.
    #[schema(value_type = String, format = Binary)]
    pub file: String,
    pub company_id: i64,
    /// Date the statement covers, YYYY-MM-DD.
    pub order_date: String,
    pub store_id: Option<i64>,
}

#[utoipa::path(
    post,
    path = "/orders/upload-daily",
    tag = "orders",
    request_body(content = DailyStatementForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Statement ingested; totals cover matched rows only", body = ApiResponse<UploadReceipt>),
        (status = 400, description = "Rejected statement; any created upload record is kept as failed", body = ErrorBody),
        (status = 413, description = "File exceeds the configured size limit", body = ErrorBody),
        (status = 500, description = "Processing fault; nothing from the run is persisted", body = ErrorBody)
    )
)]
pub async fn upload_daily_orders(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<UploadReceipt>>, HttpIngestError> {
    let statement = extract_daily_statement(multipart).await?;

    tracing::info!(
        file_name = %statement.file_name,
        company_id = statement.company_id,
        order_date = %statement.order_date,
        size = statement.bytes.len(),
        "Received daily order statement"
    );

    let receipt = DailyOrderIngestion::new(&state).ingest(statement).await?;

    let message = format!(
        "File processed: {} riders, {} orders",
        receipt.total_riders, receipt.total_orders
    );

    Ok(Json(ApiResponse::with_message(message, receipt)))
}
