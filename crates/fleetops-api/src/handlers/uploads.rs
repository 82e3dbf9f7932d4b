//! Upload run inspection endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use fleetops_core::models::{DailyUploadResponse, RiderOrderResponse};
use fleetops_core::AppError;
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::error::{ErrorBody, HttpAppError};
use crate::response::ApiResponse;
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: i64 = 50;
const MAX_PAGE_SIZE: i64 = 200;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListUploadsQuery {
    /// Restrict the listing to one company.
    pub company_id: Option<i64>,
    /// Page size, capped at 200.
    pub limit: Option<i64>,
    /// Rows to skip.
    pub offset: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/orders/uploads",
    tag = "orders",
    params(ListUploadsQuery),
    responses(
        (status = 200, description = "Upload runs, newest first", body = ApiResponse<Vec<DailyUploadResponse>>)
    )
)]
pub async fn list_uploads(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListUploadsQuery>,
) -> Result<Json<ApiResponse<Vec<DailyUploadResponse>>>, HttpAppError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    let offset = query.offset.unwrap_or(0).max(0);

    let uploads = state.db.uploads.list(query.company_id, limit, offset).await?;
    let uploads: Vec<DailyUploadResponse> =
        uploads.into_iter().map(DailyUploadResponse::from).collect();

    Ok(Json(ApiResponse::new(uploads)))
}

#[utoipa::path(
    get,
    path = "/orders/uploads/{id}",
    tag = "orders",
    params(("id" = Uuid, Path, description = "Upload id")),
    responses(
        (status = 200, description = "Upload run metadata", body = ApiResponse<DailyUploadResponse>),
        (status = 404, description = "Unknown upload", body = ErrorBody)
    )
)]
pub async fn get_upload(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DailyUploadResponse>>, HttpAppError> {
    let upload = state
        .db
        .uploads
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Upload not found".to_string()))?;

    Ok(Json(ApiResponse::new(DailyUploadResponse::from(upload))))
}

#[utoipa::path(
    get,
    path = "/orders/uploads/{id}/rows",
    tag = "orders",
    params(("id" = Uuid, Path, description = "Upload id")),
    responses(
        (status = 200, description = "Earnings rows in statement order", body = ApiResponse<Vec<RiderOrderResponse>>),
        (status = 404, description = "Unknown upload", body = ErrorBody)
    )
)]
pub async fn list_upload_rows(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<RiderOrderResponse>>>, HttpAppError> {
    state
        .db
        .uploads
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Upload not found".to_string()))?;

    let rows = state.db.rider_orders.list_by_upload(id).await?;
    let rows: Vec<RiderOrderResponse> = rows.into_iter().map(RiderOrderResponse::from).collect();

    Ok(Json(ApiResponse::new(rows)))
}

#[utoipa::path(
    delete,
    path = "/orders/uploads/{id}",
    tag = "orders",
    params(("id" = Uuid, Path, description = "Upload id")),
    responses(
        (status = 200, description = "Upload and its earnings rows deleted", body = ApiResponse<DailyUploadResponse>),
        (status = 404, description = "Unknown upload", body = ErrorBody)
    )
)]
pub async fn delete_upload(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DailyUploadResponse>>, HttpAppError> {
    let upload = state
        .db
        .uploads
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Upload not found".to_string()))?;

    state.db.uploads.delete(id).await?;
    tracing::info!(upload_id = %id, "Upload deleted");

    Ok(Json(ApiResponse::with_message(
        "Upload deleted",
        DailyUploadResponse::from(upload),
    )))
}
