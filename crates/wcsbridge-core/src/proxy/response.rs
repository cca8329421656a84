use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use super::common::sanitize_error::GENERIC_FAILURE_BODY;
use wcsbridge_types::ProxyError;

/// Used when the declared content type is missing or not a valid header value.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// A finished reply: body plus the content type to declare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeResponse {
    pub body: Bytes,
    pub content_type: String,
}

impl BridgeResponse {
    pub fn new(body: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        Self { body: body.into(), content_type: content_type.into() }
    }
}

impl IntoResponse for BridgeResponse {
    fn into_response(self) -> Response {
        let content_type = HeaderValue::from_str(&self.content_type).unwrap_or_else(|_| {
            tracing::warn!(
                content_type = %self.content_type,
                "Declared content type is not a valid header value, using {}",
                FALLBACK_CONTENT_TYPE
            );
            HeaderValue::from_static(FALLBACK_CONTENT_TYPE)
        });

        let mut response = Response::new(Body::from(self.body));
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
        response
    }
}

/// Caller-facing rendering of a [`ProxyError`].
///
/// The error detail stays in the logs; the caller only sees the status and a
/// generic body.
#[derive(Debug)]
pub struct ProxyFailure(pub ProxyError);

impl From<ProxyError> for ProxyFailure {
    fn from(err: ProxyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ProxyFailure {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self.0);
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, GENERIC_FAILURE_BODY).into_response()
    }
}
