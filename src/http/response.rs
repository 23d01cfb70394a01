//! Response construction.
//!
//! # Responsibilities
//! - Build the 301 redirect to the primary domain
//! - Relay a successful origin response (Content-Type + streamed body)
//!
//! # Design Decisions
//! - Bodies are streamed, never buffered whole
//! - A mid-stream failure cannot retract the already-sent status; it is
//!   logged and the client sees a truncated body

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use futures_util::TryStreamExt;

/// Build a 301 Moved Permanently pointing at `location`.
pub fn redirect(location: &str) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => {
            let mut response = StatusCode::MOVED_PERMANENTLY.into_response();
            response.headers_mut().insert(header::LOCATION, value);
            response
        }
        Err(err) => {
            tracing::error!(location = %location, error = %err, "redirect location not header-safe");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Relay a successful origin response to the client.
///
/// Copies the origin's Content-Type when present and non-empty, then streams
/// the body through unmodified. The client-visible status is always 200; the
/// origin status was already checked by the forwarder.
pub fn proxied(upstream: reqwest::Response) -> Response {
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .filter(|value| !value.is_empty())
        .cloned();

    let stream = upstream.bytes_stream().inspect_err(|err| {
        tracing::warn!(error = %err, "error piping response from origin");
    });

    let mut response = Response::new(Body::from_stream(stream));
    if let Some(value) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    response
}
