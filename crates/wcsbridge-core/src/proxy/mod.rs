//! Proxy module - WMS to WCS translation service
//!
//! - `request`: transport-independent view of an inbound request
//! - `mapper`: GetMap parameter names to GetCoverage parameter names
//! - `capabilities`: static GetCapabilities document
//! - `upstream`: outbound WCS client
//! - `dispatch`: path and request-type routing
//! - `server`: axum binding

pub mod capabilities;
pub mod common;
pub mod dispatch;
pub mod mapper;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;
pub mod upstream;

pub use capabilities::CapabilitiesResponder;
pub use dispatch::{Bridge, Route};
pub use mapper::{map_request, OutgoingQuery};
pub use request::IncomingRequest;
pub use response::{BridgeResponse, ProxyFailure};
pub use server::{build_bridge_router, AppState};
pub use upstream::{client::UpstreamClient, CoverageSource};
