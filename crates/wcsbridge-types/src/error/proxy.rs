//! Translation and upstream errors.

use thiserror::Error;

/// Errors that terminate a single bridged request.
///
/// Every variant is reported to the caller as the same opaque internal
/// failure. The fields exist for server-side logs only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProxyError {
    /// Upstream could not be reached (connection refused, DNS, timeout)
    #[error("Upstream unavailable: {message}")]
    UpstreamUnavailable { message: String },

    /// Upstream answered with an HTTP error status
    #[error("Upstream rejected the request with HTTP {status}")]
    UpstreamRejected { status: u16 },

    /// The static capabilities document could not be read
    #[error("Capabilities document {path} unreadable: {message}")]
    CapabilitiesUnreadable { path: String, message: String },
}

impl ProxyError {
    /// Get HTTP status code for this error.
    ///
    /// Upstream statuses are not propagated; see `UpstreamRejected`.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::UpstreamUnavailable { .. }
            | Self::UpstreamRejected { .. }
            | Self::CapabilitiesUnreadable { .. } => 500,
        }
    }
}
