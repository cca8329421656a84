mod request_executor;


use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::AppError;
use crate::proxy::mapper::OutgoingQuery;
use crate::proxy::response::{BridgeResponse, FALLBACK_CONTENT_TYPE};
use crate::proxy::upstream::CoverageSource;
use wcsbridge_types::ProxyError;

pub use request_executor::build_url;

/// Client for the single configured WCS endpoint.
pub struct UpstreamClient {
    http_client: Client,
    base_url: Url,
}

impl UpstreamClient {
    /// Create a new UpstreamClient with the given HTTP client.
    ///
    /// Accepts a pre-built `reqwest::Client` so tests and the server can
    /// share one connection pool.
    pub fn new(http_client: Client, base_url: &str) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)?;
        Ok(Self { http_client, base_url })
    }

    /// Issue one GET for the translated query.
    ///
    /// The reply is declared with the caller's FORMAT, not the upstream's
    /// own Content-Type header.
    pub async fn get_coverage(&self, query: &OutgoingQuery) -> Result<BridgeResponse, ProxyError> {
        let url = build_url(&self.base_url, query);
        tracing::debug!(url = %url, "Forwarding GetCoverage upstream");

        let response = self
            .http_client
            .get(url)
            .headers(request_executor::default_headers())
            .send()
            .await
            .map_err(|e| ProxyError::UpstreamUnavailable { message: e.to_string() })?;

        let response = request_executor::ensure_success(response).await?;
        let status = response.status();

        let body = response.bytes().await.map_err(|e| {
            tracing::debug!("Upstream body interrupted after {}", status);
            ProxyError::UpstreamUnavailable { message: e.to_string() }
        })?;

        let content_type = query.format().unwrap_or(FALLBACK_CONTENT_TYPE);
        tracing::debug!(
            status = status.as_u16(),
            bytes = body.len(),
            content_type,
            "Upstream GetCoverage succeeded"
        );

        Ok(BridgeResponse::new(body, content_type))
    }
}

#[async_trait]
impl CoverageSource for UpstreamClient {
    async fn fetch(&self, query: &OutgoingQuery) -> Result<BridgeResponse, ProxyError> {
        self.get_coverage(query).await
    }
}
