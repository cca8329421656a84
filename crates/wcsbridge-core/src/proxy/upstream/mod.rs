//! Upstream module - outbound WCS access

pub mod client;

use async_trait::async_trait;

use super::mapper::OutgoingQuery;
use super::response::BridgeResponse;
use wcsbridge_types::ProxyError;

/// Anything that can answer a translated GetCoverage query.
#[async_trait]
pub trait CoverageSource: Send + Sync {
    async fn fetch(&self, query: &OutgoingQuery) -> Result<BridgeResponse, ProxyError>;
}
