//! Typed error definitions for the bridge.
//!
//! - **`ProxyError`** ends a single request and is rendered as an opaque 500
//! - **`ConfigError`** stops start-up before the listener is bound

mod config;
mod proxy;

pub use config::ConfigError;
pub use proxy::ProxyError;
