use std::fs;
use std::path::Path;

use wcsbridge_types::{BridgeConfig, ConfigError};

/// Load the bridge configuration.
///
/// Without a path the built-in defaults are used. A missing file is an error
/// when a path was given explicitly. The result is not validated yet; CLI
/// overrides are applied first and `BridgeConfig::validated` runs last.
pub fn load_config(path: Option<&Path>) -> Result<BridgeConfig, ConfigError> {
    let Some(config_path) = path else {
        return Ok(BridgeConfig::default());
    };

    if !config_path.exists() {
        return Err(ConfigError::NotFound { path: config_path.display().to_string() });
    }

    let content = fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
        path: config_path.display().to_string(),
        message: e.to_string(),
    })?;

    let config: BridgeConfig = serde_json::from_str(&content)
        .map_err(|e| ConfigError::ParseError { message: e.to_string() })?;

    tracing::info!("Loaded configuration from {}", config_path.display());
    Ok(config)
}
