//! Start-up error types for the bridge core.
//!
//! Per-request failures use [`wcsbridge_types::ProxyError`]; `AppError`
//! covers everything that can go wrong while wiring the bridge together.

use thiserror::Error;

/// Main error type for bridge construction.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// HTTP client could not be built.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream base URL could not be parsed.
    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
