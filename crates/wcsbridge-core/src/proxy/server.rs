use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;

use super::dispatch::Bridge;
use super::request::IncomingRequest;
use super::response::ProxyFailure;

/// Axum application state
#[derive(Clone)]
pub struct AppState {
    pub bridge: Arc<Bridge>,
}

impl AppState {
    pub fn new(bridge: Bridge) -> Self {
        Self { bridge: Arc::new(bridge) }
    }
}

/// Build the bridge router.
///
/// Every path is handled by the same GET handler; routing by prefix and
/// request type happens in [`Bridge::handle`]. Other methods get a 405 from axum.
pub fn build_bridge_router(state: AppState) -> Router<()> {
    Router::new()
        .route("/", get(handle_bridge_request))
        .route("/*path", get(handle_bridge_request))
        .with_state(state)
}

pub async fn handle_bridge_request(State(state): State<AppState>, uri: Uri) -> Response {
    let request = IncomingRequest::from_query(uri.path(), uri.query());

    match state.bridge.handle(&request).await {
        Ok(response) => response.into_response(),
        Err(err) => ProxyFailure(err).into_response(),
    }
}
