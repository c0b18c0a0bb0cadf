// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{analyze_handler, health_handler, metrics_handler};
use super::middleware::{cors_layer, request_id_layers};
use crate::config::AppConfig;
use crate::error::{ProxyError, Result};
use crate::openai::OpenAiClient;
use axum::{routing::{any, get}, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub openai_client: Arc<OpenAiClient>,
}

pub fn create_router(config: AppConfig, openai_client: OpenAiClient) -> Result<Router> {
    let analyze_path = config.server.analyze_path.clone();
    if !analyze_path.starts_with('/') || analyze_path == "/health" || analyze_path == "/metrics" {
        return Err(ProxyError::Config(format!(
            "Invalid analyze_path: {}",
            analyze_path
        )));
    }

    let cors = cors_layer(&config.server);

    let state = AppState {
        config: Arc::new(config),
        openai_client: Arc::new(openai_client),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    // `any` so the handler itself answers non-POST methods with 405; the body
    // limit is enforced in the handler after that check
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route(&analyze_path, any(analyze_handler))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id);

    let app = match cors {
        Some(cors) => app.layer(cors),
        None => app,
    };

    Ok(app.with_state(state))
}
