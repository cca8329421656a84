//! Path and request-type routing.

use std::sync::Arc;

use super::capabilities::{CapabilitiesResponder, GET_CAPABILITIES};
use super::common::client_builder::build_http_client;
use super::mapper::map_request;
use super::request::IncomingRequest;
use super::response::BridgeResponse;
use super::upstream::{client::UpstreamClient, CoverageSource};
use crate::error::AppError;
use wcsbridge_types::{BridgeConfig, ProxyError};

pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Where a request goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Outside the service prefix: static informational text
    Fallback,
    /// `REQUEST=GetCapabilities` under the prefix
    Capabilities,
    /// Everything else under the prefix, including a missing `REQUEST`
    Coverage,
}

/// Decide the route from the path and `REQUEST` alone.
pub fn classify(request: &IncomingRequest, service_prefix: &str) -> Route {
    if !request.path().starts_with(service_prefix) {
        return Route::Fallback;
    }
    match request.request_type() {
        Some(GET_CAPABILITIES) => Route::Capabilities,
        _ => Route::Coverage,
    }
}

/// The stateless request handler. Holds only read-only configuration.
pub struct Bridge {
    service_prefix: String,
    fallback_message: String,
    capabilities: CapabilitiesResponder,
    upstream: Arc<dyn CoverageSource>,
}

impl Bridge {
    pub fn new(config: &BridgeConfig, upstream: Arc<dyn CoverageSource>) -> Self {
        Self {
            service_prefix: config.service_prefix.clone(),
            fallback_message: config.fallback_message.clone(),
            capabilities: CapabilitiesResponder::new(config.capabilities_path.clone()),
            upstream,
        }
    }

    /// Wire the bridge to the real upstream described by `config`.
    pub fn from_config(config: &BridgeConfig) -> Result<Self, AppError> {
        let http_client = build_http_client(config.request_timeout_secs)?;
        let upstream = UpstreamClient::new(http_client, &config.upstream_url)?;
        Ok(Self::new(config, Arc::new(upstream)))
    }

    pub fn route(&self, request: &IncomingRequest) -> Route {
        classify(request, &self.service_prefix)
    }

    pub async fn handle(&self, request: &IncomingRequest) -> Result<BridgeResponse, ProxyError> {
        let route = self.route(request);
        tracing::debug!(path = request.path(), ?route, "Dispatching request");

        match route {
            Route::Fallback => Ok(BridgeResponse::new(
                self.fallback_message.clone().into_bytes(),
                TEXT_CONTENT_TYPE,
            )),
            Route::Capabilities => self.capabilities.respond().await,
            Route::Coverage => {
                let query = map_request(request);
                self.upstream.fetch(&query).await
            },
        }
    }
}
