// HTTP middleware
// Author: kelexine (https://github.com/kelexine)

use crate::config::ServerConfig;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Create request ID layers for the application
pub fn request_id_layers() -> (SetRequestIdLayer<MakeRequestUuid>, PropagateRequestIdLayer) {
    (
        SetRequestIdLayer::x_request_id(MakeRequestUuid),
        PropagateRequestIdLayer::x_request_id(),
    )
}

/// CORS layer for frontends served from another origin, if enabled
pub fn cors_layer(config: &ServerConfig) -> Option<CorsLayer> {
    config.cors_permissive.then(CorsLayer::permissive)
}
