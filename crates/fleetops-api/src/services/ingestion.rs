//! Daily order-statement ingestion
//!
//! One upload runs as: validate the file envelope, then inside a single
//! transaction create the upload record, read the per-order rate, decode the
//! sheet, resolve the header columns, and walk the data rows matching riders
//! and pricing their earnings. A rejected statement commits its record with
//! `failed` status so the run stays auditable; an unexpected fault rolls the
//! whole run back so no half-processed upload is ever visible.

use std::sync::Arc;

use chrono::NaiveDate;
use fleetops_core::models::{DailyOrderUpload, UploadReceipt, UploadStatus};
use fleetops_core::{AppError, ErrorMetadata};
use fleetops_db::TransactionGuard;
use fleetops_ingest::{
    decode_sheet, parse_row, resolve_header, HeaderColumns, RowOutcome, SheetFormat, SheetValidator,
};
use rust_decimal::Decimal;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::error::sheet_error_to_app;
use crate::state::AppState;

/// A daily statement as received from the upload form.
#[derive(Debug)]
pub struct DailyStatement {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub company_id: i64,
    pub store_id: Option<i64>,
    pub order_date: NaiveDate,
}

/// Orchestrates one statement upload end to end.
pub struct DailyOrderIngestion {
    state: Arc<AppState>,
}

impl DailyOrderIngestion {
    pub fn new(state: &Arc<AppState>) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Ingest one statement and return the totals for the success response.
    pub async fn ingest(&self, statement: DailyStatement) -> Result<UploadReceipt, AppError> {
        let validator = SheetValidator::new(
            self.state.sheets.max_file_size,
            self.state.sheets.allowed_extensions.clone(),
        );
        let extension = validator
            .validate_extension(&statement.file_name)
            .map_err(sheet_error_to_app)?;
        validator
            .validate_file_size(statement.bytes.len())
            .map_err(sheet_error_to_app)?;
        let format = SheetFormat::from_extension(&extension)
            .ok_or_else(|| AppError::Internal(format!("No decoder for extension '{extension}'")))?;

        let DailyStatement {
            file_name,
            bytes,
            company_id,
            store_id,
            order_date,
        } = statement;

        let mut tx = TransactionGuard::begin(&self.state.db.pool).await?;
        let upload = self
            .state
            .db
            .uploads
            .create_tx(&mut tx, Uuid::new_v4(), &file_name, company_id, store_id, order_date)
            .await?;

        match self.process(&mut tx, &upload, bytes, format).await {
            Ok((total_riders, total_orders)) => {
                self.state
                    .db
                    .uploads
                    .finalize_tx(
                        &mut tx,
                        upload.id,
                        UploadStatus::Processed,
                        total_riders,
                        total_orders,
                    )
                    .await?;
                tx.commit().await?;

                tracing::info!(
                    upload_id = %upload.id,
                    total_riders,
                    total_orders,
                    "Statement processed"
                );

                Ok(UploadReceipt {
                    upload_id: upload.id,
                    total_riders,
                    total_orders,
                    order_date,
                })
            }
            Err(err) if err.http_status_code() < 500 => {
                // Rejected statement: the record is kept, stamped failed, so
                // the run stays visible to the back office.
                self.state
                    .db
                    .uploads
                    .finalize_tx(&mut tx, upload.id, UploadStatus::Failed, 0, 0)
                    .await?;
                tx.commit().await?;

                tracing::debug!(upload_id = %upload.id, error = %err, "Statement rejected");
                Err(err)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(error = %rollback_err, "Rollback failed after ingestion fault");
                }
                Err(err)
            }
        }
    }

    /// Decode, resolve the header, and run the row loop inside the open
    /// transaction.
    async fn process(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        upload: &DailyOrderUpload,
        bytes: Vec<u8>,
        format: SheetFormat,
    ) -> Result<(i32, i64), AppError> {
        let rate = self.state.db.settings.per_order_rate_tx(tx).await?;

        // Decoding is CPU-bound (xlsx inflation in particular); keep it off
        // the async workers.
        let grid = tokio::task::spawn_blocking(move || decode_sheet(&bytes, format))
            .await
            .map_err(|err| AppError::Internal(format!("Sheet decoding task failed: {err}")))?
            .map_err(sheet_error_to_app)?;

        let (header, data_rows) = grid.split_header().map_err(sheet_error_to_app)?;
        let columns = resolve_header(header);
        columns.require().map_err(sheet_error_to_app)?;

        self.process_rows(tx, upload, data_rows, &columns, rate).await
    }

    async fn process_rows(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        upload: &DailyOrderUpload,
        data_rows: &[Vec<String>],
        columns: &HeaderColumns,
        rate: Decimal,
    ) -> Result<(i32, i64), AppError> {
        let mut total_riders: i32 = 0;
        let mut total_orders: i64 = 0;

        for (row_idx, row) in data_rows.iter().enumerate() {
            // Sheet row number: 1-based, counting the header row.
            let row_number = row_idx as i32 + 2;
            let fields = match parse_row(row, columns) {
                RowOutcome::Parsed(fields) => fields,
                RowOutcome::Skipped(reason) => {
                    tracing::debug!(upload_id = %upload.id, row_number, %reason, "Skipping row");
                    continue;
                }
            };

            // Identifiers are matched trimmed but stored as uploaded.
            let lookup_id = fields.external_rider_id.trim();
            let rider_id = match self
                .state
                .db
                .assignments
                .find_rider_tx(tx, upload.company_id, lookup_id)
                .await?
            {
                Some(rider_id) => rider_id,
                None => {
                    tracing::debug!(
                        upload_id = %upload.id,
                        row_number,
                        external_rider_id = lookup_id,
                        "No active assignment for rider, skipping row"
                    );
                    continue;
                }
            };

            // checked_mul: an absurdly configured rate must fail the run,
            // not panic the worker.
            let total_earning = Decimal::from(fields.order_count)
                .checked_mul(rate)
                .ok_or_else(|| {
                    AppError::Internal("Computed earnings exceed the supported range".to_string())
                })?;
            self.state
                .db
                .rider_orders
                .create_tx(
                    tx,
                    upload.id,
                    upload.company_id,
                    upload.store_id,
                    rider_id,
                    &fields.rider_name,
                    &fields.external_rider_id,
                    row_number,
                    fields.order_count,
                    rate,
                    total_earning,
                    upload.order_date,
                )
                .await?;

            total_riders += 1;
            total_orders += i64::from(fields.order_count);
        }

        Ok((total_riders, total_orders))
    }
}
