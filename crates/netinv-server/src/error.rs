//! HTTP error mapping
//!
//! Every failure leaves the JSON surfaces as
//! `{"code": "ERR_...", "message": "..."}` with a status derived from the
//! error kind. Once the request-id middleware has run, the body also carries
//! `request_id`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use netinv_core::{ExError, ExErrorKind, InventoryError};

/// HTTP status for an error kind
pub fn status_for(kind: ExErrorKind) -> StatusCode {
    match kind {
        ExErrorKind::NotFound => StatusCode::NOT_FOUND,
        ExErrorKind::Conflict | ExErrorKind::NoOp | ExErrorKind::Validation => {
            StatusCode::BAD_REQUEST
        }
        ExErrorKind::Io
        | ExErrorKind::Serialization
        | ExErrorKind::Persistence
        | ExErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Error returned by JSON handlers
#[derive(Debug)]
pub struct ApiError(pub ExError);

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        ApiError(err.into())
    }
}

impl From<ExError> for ApiError {
    fn from(err: ExError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.kind());
        let mut body = serde_json::json!({
            "code": self.0.code(),
            "message": self.0.message(),
        });
        if let Some(request_id) = self.0.request_id() {
            body["request_id"] = serde_json::Value::from(request_id.as_str());
        }

        let mut response = (status, axum::Json(body)).into_response();
        // Picked up by the request-id middleware to stamp the id
        response.extensions_mut().insert(self.0);
        response
    }
}
