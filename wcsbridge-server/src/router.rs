use axum::Router;
use tower_http::trace::TraceLayer;

use wcsbridge_core::proxy::middleware::cors::cors_layer;
use wcsbridge_core::proxy::{build_bridge_router, AppState};

pub fn build_router(state: AppState) -> Router {
    build_bridge_router(state).layer(TraceLayer::new_for_http()).layer(cors_layer())
}
