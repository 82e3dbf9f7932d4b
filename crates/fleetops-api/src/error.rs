//! HTTP error rendering
//!
//! Handlers return [`HttpAppError`] (or [`HttpIngestError`] on the statement
//! upload route), which turns an [`AppError`] into the error envelope
//! `{"status": "error", "message": ...}` with the status code the error
//! self-describes. Details never reach the client: sensitive variants render
//! their short client message and keep the full chain in the logs.

use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fleetops_core::{AppError, ErrorMetadata, LogLevel};
use fleetops_ingest::SheetError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use utoipa::ToSchema;

/// Error envelope returned by every endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Always "error".
    pub status: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Wrapper for [`AppError`] to implement `IntoResponse` (orphan rule:
/// `IntoResponse` is axum's, `AppError` lives in fleetops-core).
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::from(err))
    }
}

impl From<SheetError> for HttpAppError {
    fn from(err: SheetError) -> Self {
        HttpAppError(sheet_error_to_app(err))
    }
}

/// Map a structural sheet failure onto the shared error taxonomy. Everything
/// the uploader can correct is a 400-class input error; a file that passed
/// validation but cannot be decoded is a server-side fault.
pub fn sheet_error_to_app(err: SheetError) -> AppError {
    match err {
        SheetError::FileTooLarge { .. } => AppError::PayloadTooLarge(err.to_string()),
        SheetError::UnsupportedExtension { .. }
        | SheetError::EmptyFile
        | SheetError::TooFewRows
        | SheetError::MissingColumns(_) => AppError::InvalidInput(err.to_string()),
        SheetError::Decode(detail) => {
            AppError::Internal(format!("Failed to decode spreadsheet: {detail}"))
        }
    }
}

fn status_of(error: &AppError) -> StatusCode {
    StatusCode::from_u16(error.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => tracing::debug!(error = %error, error_type, "Request failed"),
        LogLevel::Warn => tracing::warn!(error = %error, error_type, "Request failed"),
        LogLevel::Error => {
            tracing::error!(error = %error.detailed_message(), error_type, "Request failed")
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let status = status_of(&self.0);
        log_error(&self.0);

        (status, Json(ErrorBody::new(self.0.client_message()))).into_response()
    }
}

/// Error wrapper for the statement upload route.
///
/// Upload clients match on the "Error processing file: " prefix to tell a
/// processing fault from a rejected statement, so server-side failures are
/// prefixed while validation failures keep their plain message.
#[derive(Debug)]
pub struct HttpIngestError(pub AppError);

impl From<AppError> for HttpIngestError {
    fn from(err: AppError) -> Self {
        HttpIngestError(err)
    }
}

impl From<SheetError> for HttpIngestError {
    fn from(err: SheetError) -> Self {
        HttpIngestError(sheet_error_to_app(err))
    }
}

impl IntoResponse for HttpIngestError {
    fn into_response(self) -> Response {
        let status = status_of(&self.0);
        log_error(&self.0);

        let message = if status.is_server_error() {
            format!("Error processing file: {}", self.0.client_message())
        } else {
            self.0.client_message()
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

/// JSON extractor that rejects malformed bodies with the error envelope
/// instead of axum's plain-text rejection.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = HttpAppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            HttpAppError(AppError::InvalidInput(format!(
                "Invalid request body: {}",
                rejection.body_text()
            )))
        })?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_validation_errors_are_client_errors() {
        let err = sheet_error_to_app(SheetError::TooFewRows);
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(
            err.client_message(),
            "File must contain a header row and at least one data row"
        );

        let err = sheet_error_to_app(SheetError::MissingColumns("order count".to_string()));
        assert_eq!(err.http_status_code(), 400);
        assert!(err.client_message().contains("order count"));
    }

    #[test]
    fn test_oversized_file_maps_to_413() {
        let err = sheet_error_to_app(SheetError::FileTooLarge { size: 20, max: 10 });
        assert_eq!(err.http_status_code(), 413);
    }

    #[test]
    fn test_decode_failure_is_internal_and_hidden() {
        let err = sheet_error_to_app(SheetError::Decode("corrupt zip central directory".into()));
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.client_message(), "Internal server error");
        assert!(err.detailed_message().contains("corrupt zip"));
    }

    #[test]
    fn test_ingest_error_prefixes_server_failures_only() {
        let server = HttpIngestError(AppError::Internal("boom".into()));
        let response = server.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let client = HttpIngestError(AppError::InvalidInput("order_date is required".into()));
        let response = client.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        use axum::body::to_bytes;

        let response = HttpIngestError(AppError::Internal("pool exhausted".into())).into_response();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Error processing file: Internal server error");
    }
}
