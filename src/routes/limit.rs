//! Request body cap. Oversized bodies are answered with the usual error envelope.

use crate::error::AppError;
use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Largest accepted request body, in bytes.
pub const BODY_LIMIT: usize = 1024 * 1024;

/// Sits outside `RequestBodyLimitLayer`, which rejects a too-large `Content-Length` with plain text.
pub async fn oversized_body_envelope(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    if response.status() != StatusCode::PAYLOAD_TOO_LARGE || is_json(&response) {
        return response;
    }
    AppError::PayloadTooLarge(format!("request body exceeds {} bytes", BODY_LIMIT)).into_response()
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map_or(false, |v| v.starts_with("application/json"))
}
