//! Middleware for logging requests and responses.

use axum::{extract::Request, middleware::Next, response::Response};

/// How much of a request or response body is logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level. If a body is
/// longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is truncated and the full
/// body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();
    let body_text = String::from_utf8_lossy(&body_bytes).to_string();

    log_body(
        &format!("Received request: {} {}", parts.method, parts.uri),
        &body_text,
    );

    let request = Request::from_parts(parts, body_text.into());
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();
    let body_text = String::from_utf8_lossy(&body_bytes).to_string();

    log_body(&format!("Sending response: {}", parts.status), &body_text);

    Response::from_parts(parts, body_text.into())
}

fn log_body(heading: &str, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "{heading}\nbody: {}...",
            &body[..floor_char_boundary(body, LOG_BODY_LENGTH_LIMIT)]
        );
        tracing::debug!("Full body: {body:?}");
    } else {
        tracing::info!("{heading}\nbody: {body:?}");
    }
}

// Truncating on a byte index could split a multi-byte character and panic.
fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());

    while !text.is_char_boundary(index) {
        index -= 1;
    }

    index
}

#[cfg(test)]
mod logging_tests {
    use super::floor_char_boundary;

    #[test]
    fn char_boundary_is_not_split() {
        let text = "caf\u{00e9}s";

        // Index 4 lands in the middle of the two-byte 'é'.
        assert_eq!(floor_char_boundary(text, 4), 3);
        assert_eq!(floor_char_boundary(text, 5), 5);
        assert_eq!(floor_char_boundary(text, 100), text.len());
    }
}
