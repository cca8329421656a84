use std::path::PathBuf;

use super::response::BridgeResponse;
use wcsbridge_types::ProxyError;

/// Request type answered from the static document.
pub const GET_CAPABILITIES: &str = "GetCapabilities";

pub const CAPABILITIES_CONTENT_TYPE: &str = "text/xml";

/// Serves the configured capabilities document.
///
/// The file is read on every call, so edits on disk show up without a restart.
#[derive(Debug, Clone)]
pub struct CapabilitiesResponder {
    path: PathBuf,
}

impl CapabilitiesResponder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn respond(&self) -> Result<BridgeResponse, ProxyError> {
        let body = tokio::fs::read(&self.path).await.map_err(|e| {
            ProxyError::CapabilitiesUnreadable {
                path: self.path.display().to_string(),
                message: e.to_string(),
            }
        })?;

        tracing::debug!("Serving {} bytes of capabilities from {}", body.len(), self.path.display());
        Ok(BridgeResponse::new(body, CAPABILITIES_CONTENT_TYPE))
    }
}
