use reqwest::{header, Response};
use url::Url;

use crate::proxy::common::sanitize_error::{body_preview, MAX_LOGGED_BODY_BYTES};
use crate::proxy::mapper::OutgoingQuery;
use wcsbridge_types::ProxyError;

pub const DEFAULT_USER_AGENT: &str = concat!("wcsbridge/", env!("CARGO_PKG_VERSION"));

/// Append the query to the base URL with form percent-encoding.
///
/// Any query already present on the base URL is kept in front.
pub fn build_url(base_url: &Url, query: &OutgoingQuery) -> Url {
    let mut url = base_url.clone();
    {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in query.present_pairs() {
            pairs.append_pair(name, value);
        }
    }
    url
}

pub fn default_headers() -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::USER_AGENT, header::HeaderValue::from_static(DEFAULT_USER_AGENT));
    headers
}

/// Turn an HTTP error status into `UpstreamRejected`, logging the body.
pub async fn ensure_success(response: Response) -> Result<Response, ProxyError> {
    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return Ok(response);
    }

    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => format!("<unreadable body: {}>", e),
    };
    tracing::warn!(
        status = status.as_u16(),
        body = %body_preview(&text, MAX_LOGGED_BODY_BYTES),
        "Upstream rejected GetCoverage"
    );

    Err(ProxyError::UpstreamRejected { status: status.as_u16() })
}
