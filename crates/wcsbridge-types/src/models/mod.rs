//! Configuration model for the bridge.

pub mod config;

pub use config::BridgeConfig;
