// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::{ProxyError, Result};
use crate::metrics;
use crate::models::analyze::AnalyzeRequest;
use crate::translation::{build_completion_request, extract_image, passthrough_response};
use crate::vision::validate_image;
use axum::{
    body::{to_bytes, Body, Bytes},
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use http_body_util::LengthLimitError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Handler for the image analysis endpoint.
///
/// Every outcome, including failures, is turned into a response here. The
/// body is taken unread so the method check runs before any size limit.
pub async fn analyze_handler(
    State(state): State<AppState>,
    method: Method,
    body: Body,
) -> Response {
    let start = Instant::now();

    let response = match analyze(&state, &method, body).await {
        Ok(response) => response,
        Err(e) => {
            match &e {
                ProxyError::MethodNotAllowed
                | ProxyError::MissingImage
                | ProxyError::InvalidImage(_)
                | ProxyError::ImageTooLarge(_) => warn!("Rejected {} request: {}", method, e),
                ProxyError::Upstream { .. } => warn!("Relaying upstream failure: {}", e),
                _ => error!("Analysis failed: {}", e),
            }
            e.into_response()
        }
    };

    let status = response.status();
    metrics::record_request(status.as_u16(), start.elapsed().as_secs_f64());
    debug!("Analysis finished with {} in {:?}", status, start.elapsed());
    response
}

/// Validate → build → call → map.
async fn analyze(state: &AppState, method: &Method, body: Body) -> Result<Response> {
    // 1. Validate
    if *method != Method::POST {
        return Err(ProxyError::MethodNotAllowed);
    }
    let body = read_body(body, state.config.server.max_body_bytes).await?;
    let image = extract_image(AnalyzeRequest::parse(&body)?)?;
    validate_image(&image, &state.config.vision)?;

    info!("Received analysis request: image_chars={}", image.len());

    // 2. Build
    let completion = build_completion_request(&image, &state.config.openai);

    // 3. Call
    let upstream_body = state.openai_client.chat_completion(&completion).await?;

    // 4. Map
    passthrough_response(upstream_body)
}

/// Buffer the request body, capped at `limit` bytes.
async fn read_body(body: Body, limit: usize) -> Result<Bytes> {
    to_bytes(body, limit).await.map_err(|e| {
        let source = e.into_inner();
        if source.downcast_ref::<LengthLimitError>().is_some() {
            ProxyError::ImageTooLarge(format!(
                "Request body exceeds maximum of {} bytes",
                limit
            ))
        } else {
            ProxyError::Internal(format!("Failed to read request body: {}", source))
        }
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub checks: HashMap<String, HealthCheck>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
}

/// Local-only health report; never calls the upstream.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();
    let mut overall_status = HealthStatus::Healthy;

    let key_check = if state.openai_client.has_api_key() {
        HealthCheck {
            status: "ok".to_string(),
            message: "API key configured".to_string(),
        }
    } else {
        overall_status = HealthStatus::Degraded;
        HealthCheck {
            status: "warning".to_string(),
            message: "OPENAI_API_KEY is not set; upstream calls will be rejected".to_string(),
        }
    };
    checks.insert("api_key".to_string(), key_check);

    let config_check = HealthCheck {
        status: "ok".to_string(),
        message: format!(
            "API base: {}, model: {}",
            state.openai_client.base_url(),
            state.openai_client.model()
        ),
    };
    checks.insert("configuration".to_string(), config_check);

    Json(HealthResponse {
        status: overall_status,
        checks,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Prometheus text exposition
pub async fn metrics_handler() -> Result<Response> {
    let body = metrics::gather_metrics()
        .map_err(|e| ProxyError::Internal(format!("Failed to encode metrics: {}", e)))?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
        .into_response())
}
