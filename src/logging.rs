//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// The number of bytes of a response body logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// The request line and response status are logged at the `info` level along
/// with the first [LOG_BODY_LENGTH_LIMIT] bytes of the response body. The
/// full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    tracing::info!(
        "Received request: {} {} (htmx: {})",
        request.method(),
        request.uri(),
        request.headers().contains_key("hx-request")
    );

    let response = next.run(request).await;
    let (parts, body) = response.into_parts();

    let body_bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    log_response(parts.status, &body_bytes);

    Response::from_parts(parts, Body::from(body_bytes))
}

fn log_response(status: StatusCode, body: &Bytes) {
    let body_text = String::from_utf8_lossy(body);

    if body_text.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {status}\nbody: {}...",
            truncate(&body_text, LOG_BODY_LENGTH_LIMIT)
        );
        tracing::debug!("Full response body: {body_text:?}");
    } else {
        tracing::info!("Sending response: {status}\nbody: {body_text:?}");
    }
}

/// The longest prefix of `text` that is at most `max_bytes` long and ends on
/// a character boundary.
fn truncate(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }

    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    &text[..end]
}
