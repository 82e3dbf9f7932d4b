//! Per-order rate endpoints.
//!
//! The rate is read transactionally by every ingestion run, so a change here
//! only affects runs that start after the update commits.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use fleetops_core::models::{PerOrderRateResponse, UpdatePerOrderRateRequest};
use fleetops_core::AppError;
use rust_decimal::Decimal;

use crate::error::{ErrorBody, HttpAppError, ValidatedJson};
use crate::response::ApiResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/settings/per-order-rate",
    tag = "settings",
    responses(
        (status = 200, description = "Currently configured rate", body = ApiResponse<PerOrderRateResponse>),
        (status = 400, description = "Rate not configured", body = ErrorBody)
    )
)]
pub async fn get_per_order_rate(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<PerOrderRateResponse>>, HttpAppError> {
    let rate = state.db.settings.per_order_rate().await?;

    Ok(Json(ApiResponse::new(PerOrderRateResponse { rate })))
}

#[utoipa::path(
    put,
    path = "/settings/per-order-rate",
    tag = "settings",
    request_body = UpdatePerOrderRateRequest,
    responses(
        (status = 200, description = "Rate stored", body = ApiResponse<PerOrderRateResponse>),
        (status = 400, description = "Invalid rate", body = ErrorBody)
    )
)]
pub async fn update_per_order_rate(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<UpdatePerOrderRateRequest>,
) -> Result<Json<ApiResponse<PerOrderRateResponse>>, HttpAppError> {
    if request.rate <= Decimal::ZERO {
        return Err(AppError::InvalidInput("rate must be greater than zero".to_string()).into());
    }
    // The earnings columns store two decimal places; a finer rate would be
    // rounded on insert and the stored total would no longer be count * rate.
    if request.rate.normalize().scale() > 2 {
        return Err(AppError::InvalidInput(
            "rate must have at most two decimal places".to_string(),
        )
        .into());
    }

    state.db.settings.set_per_order_rate(request.rate).await?;
    tracing::info!(rate = %request.rate, "Per-order rate updated");

    Ok(Json(ApiResponse::with_message(
        "Per-order rate updated",
        PerOrderRateResponse { rate: request.rate },
    )))
}
