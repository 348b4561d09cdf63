//! Request correlation middleware

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use netinv_core::ExError;
use netinv_core_types::schema::HEADER_REQUEST_ID;
use netinv_core_types::{RequestContext, RequestId};
use tracing::Instrument;

use crate::error::ApiError;

/// Assign a request id, expose it to handlers and echo it in the response
///
/// An incoming `x-request-id` header is reused; otherwise a UUIDv7 is
/// generated. JSON error responses are re-rendered with the id attached.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(HEADER_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(|v| RequestId::from_string(v.to_string()))
        .unwrap_or_default();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    req.extensions_mut()
        .insert(RequestContext::with_request_id(request_id.clone()));

    let mut response = next.run(req).instrument(span).await;

    if let Some(err) = response.extensions_mut().remove::<ExError>() {
        if err.request_id().is_none() {
            response = ApiError(err.with_request_id(request_id.clone())).into_response();
        }
    }

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(HEADER_REQUEST_ID, value);
    }
    response
}
