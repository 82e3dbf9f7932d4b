//! OpenAPI documentation assembled from the handler annotations.

use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::handlers;
use crate::handlers::upload_daily::DailyStatementForm;
use crate::response::ApiResponse;
use fleetops_core::models::{
    DailyUploadResponse, PerOrderRateResponse, RiderOrderResponse, UpdatePerOrderRateRequest,
    UploadReceipt, UploadStatus,
};

// Decimal fields serialize as JSON numbers (serde-float); the documented
// schema type has to match.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "FleetOps Orders API",
        description = "Daily order-statement ingestion for the fleet back office: spreadsheet uploads, per-rider earnings rows, and the per-order rate setting.",
        version = "0.1.0"
    ),
    paths(
        handlers::upload_daily::upload_daily_orders,
        handlers::uploads::list_uploads,
        handlers::uploads::get_upload,
        handlers::uploads::list_upload_rows,
        handlers::uploads::delete_upload,
        handlers::settings::get_per_order_rate,
        handlers::settings::update_per_order_rate,
    ),
    components(schemas(
        DailyStatementForm,
        UploadStatus,
        UploadReceipt,
        DailyUploadResponse,
        RiderOrderResponse,
        PerOrderRateResponse,
        UpdatePerOrderRateRequest,
        ErrorBody,
        ApiResponse<UploadReceipt>,
        ApiResponse<DailyUploadResponse>,
        ApiResponse<Vec<DailyUploadResponse>>,
        ApiResponse<Vec<RiderOrderResponse>>,
        ApiResponse<PerOrderRateResponse>,
    )),
    tags(
        (name = "orders", description = "Statement ingestion and upload runs"),
        (name = "settings", description = "Per-order rate configuration")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_fields_documented_as_numbers() {
        let spec = serde_json::to_value(ApiDoc::openapi()).unwrap();

        let rate = &spec["components"]["schemas"]["PerOrderRateResponse"]["properties"]["rate"];
        assert_eq!(rate["type"], "number");

        let earning =
            &spec["components"]["schemas"]["RiderOrderResponse"]["properties"]["totalEarning"];
        assert_eq!(earning["type"], "number");
    }
}
