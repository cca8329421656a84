//! Bridge configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::{Validate, ValidationError};

use crate::error::ConfigError;

pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8080/wcs";
pub const DEFAULT_CAPABILITIES_PATH: &str = "capabilities.xml";
pub const DEFAULT_SERVICE_PREFIX: &str = "/services";
pub const DEFAULT_FALLBACK_MESSAGE: &str =
    "WMS to WCS bridge. Send WMS requests under the service path.";
pub const DEFAULT_PORT: u16 = 8046;

/// Start-up configuration. Resolved once and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct BridgeConfig {
    /// WCS endpoint that receives the translated GetCoverage requests
    #[validate(url)]
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,
    /// Static document served for GetCapabilities
    #[serde(default = "default_capabilities_path")]
    pub capabilities_path: PathBuf,
    /// Path prefix under which requests are translated
    #[validate(length(min = 1_u64), custom(function = "validate_service_prefix"))]
    #[serde(default = "default_service_prefix")]
    pub service_prefix: String,
    /// Plain-text body for paths outside the service prefix
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,
    /// Interface to bind to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Port to listen on
    #[validate(range(min = 1_u16))]
    #[serde(default = "default_port")]
    pub port: u16,
    /// Outbound timeout; `None` keeps the HTTP client default
    #[validate(range(min = 1_u64, max = 3600_u64))]
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            upstream_url: default_upstream_url(),
            capabilities_path: default_capabilities_path(),
            service_prefix: default_service_prefix(),
            fallback_message: default_fallback_message(),
            bind_address: default_bind_address(),
            port: DEFAULT_PORT,
            request_timeout_secs: None,
        }
    }
}

impl BridgeConfig {
    /// Get the full bind socket address.
    pub fn get_socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Run field validation, reporting the first failing field.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if let Err(errors) = self.validate() {
            let field_errors = errors.field_errors();
            let mut fields: Vec<_> = field_errors.iter().collect();
            fields.sort_by(|a, b| a.0.cmp(b.0));

            if let Some((field, errs)) = fields.first() {
                let message = errs
                    .iter()
                    .map(|e| e.message.as_ref().map_or_else(|| e.code.to_string(), |m| m.to_string()))
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(ConfigError::ValidationError { field: field.to_string(), message });
            }
            return Err(ConfigError::ValidationError {
                field: "config".to_string(),
                message: errors.to_string(),
            });
        }
        Ok(self)
    }
}

fn validate_service_prefix(prefix: &str) -> Result<(), ValidationError> {
    if prefix.starts_with('/') {
        Ok(())
    } else {
        let mut err = ValidationError::new("service_prefix");
        err.message = Some("must start with '/'".into());
        Err(err)
    }
}

fn default_upstream_url() -> String {
    DEFAULT_UPSTREAM_URL.to_string()
}

fn default_capabilities_path() -> PathBuf {
    PathBuf::from(DEFAULT_CAPABILITIES_PATH)
}

fn default_service_prefix() -> String {
    DEFAULT_SERVICE_PREFIX.to_string()
}

fn default_fallback_message() -> String {
    DEFAULT_FALLBACK_MESSAGE.to_string()
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}
