//! Multipart form extraction for the statement upload.

use axum::extract::multipart::Field;
use axum::extract::Multipart;
use chrono::NaiveDate;
use fleetops_core::AppError;

use crate::services::ingestion::DailyStatement;

/// Pull the statement file and its companion fields out of the multipart
/// form. Unknown fields are ignored so clients can send extras without
/// breaking.
pub async fn extract_daily_statement(mut multipart: Multipart) -> Result<DailyStatement, AppError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut company_id: Option<i64> = None;
    let mut store_id: Option<i64> = None;
    let mut order_date: Option<NaiveDate> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::InvalidInput(format!("Failed to read multipart form: {err}")))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("unknown").to_string();
                let bytes = field.bytes().await.map_err(|err| {
                    AppError::InvalidInput(format!("Failed to read file field: {err}"))
                })?;
                file = Some((file_name, bytes.to_vec()));
            }
            "company_id" => {
                let value = read_text(field, "company_id").await?;
                company_id = Some(value.trim().parse::<i64>().map_err(|_| {
                    AppError::InvalidInput("company_id must be an integer".to_string())
                })?);
            }
            "store_id" => {
                let value = read_text(field, "store_id").await?;
                let value = value.trim();
                // Browsers submit empty strings for untouched optional inputs.
                if !value.is_empty() {
                    store_id = Some(value.parse::<i64>().map_err(|_| {
                        AppError::InvalidInput("store_id must be an integer".to_string())
                    })?);
                }
            }
            "order_date" => {
                let value = read_text(field, "order_date").await?;
                order_date =
                    Some(NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
                        AppError::InvalidInput(
                            "order_date must be a date in YYYY-MM-DD format".to_string(),
                        )
                    })?);
            }
            _ => {}
        }
    }

    let (file_name, bytes) =
        file.ok_or_else(|| AppError::InvalidInput("No file provided".to_string()))?;
    let company_id =
        company_id.ok_or_else(|| AppError::InvalidInput("company_id is required".to_string()))?;
    let order_date =
        order_date.ok_or_else(|| AppError::InvalidInput("order_date is required".to_string()))?;

    Ok(DailyStatement {
        file_name,
        bytes,
        company_id,
        store_id,
        order_date,
    })
}

async fn read_text(field: Field<'_>, name: &str) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|err| AppError::InvalidInput(format!("Failed to read {name} field: {err}")))
}
