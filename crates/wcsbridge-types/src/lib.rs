//! # WCS Bridge Types
//!
//! Error definitions and the configuration model shared by the bridge crates.
//!
//! - **`error`** - Typed error hierarchy for proxying and configuration
//! - **`models`** - `BridgeConfig` and its defaults
//!
//! ## Architecture Role
//!
//! `wcsbridge-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!     wcsbridge-types (this crate)
//!             │
//!             ▼
//!      wcsbridge-core
//!             │
//!             ▼
//!     wcsbridge-server
//! ```

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ConfigError, ProxyError};

pub use models::BridgeConfig;
