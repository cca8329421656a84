// CORS middleware
use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// create CORS layer
///
/// Browser map clients load tiles cross-origin, so any origin may issue GETs.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(false)
        .max_age(std::time::Duration::from_secs(3600))
}
