//! Success envelope shared by every endpoint.

use serde::Serialize;
use utoipa::ToSchema;

/// `{"status": "success", "message": ..., "data": ...}`; the message is
/// omitted when an endpoint has nothing human-readable to add.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Always "success".
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: None,
            data,
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: Some(message.into()),
            data,
        }
    }
}
