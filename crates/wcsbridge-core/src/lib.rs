//! # WCS Bridge Core
//!
//! Request translation for the WMS to WCS bridge:
//!
//! - **`proxy`** - routing, parameter mapping, capabilities and the upstream client
//! - **`modules`** - configuration loading
//! - **`error`** - start-up errors

pub mod error;
pub mod modules;
pub mod proxy;

pub use error::AppError;
pub use wcsbridge_types::{BridgeConfig, ProxyError};
