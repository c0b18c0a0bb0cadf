// Router-level tests for health, metrics and configuration checks
// Author: kelexine (https://github.com/kelexine)

use analyze_proxy::config::AppConfig;
use analyze_proxy::openai::{ApiKey, OpenAiClient};
use analyze_proxy::server::{create_router, HealthResponse, HealthStatus};
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

fn router(key: &str) -> Router {
    let config = AppConfig::default();
    let client = OpenAiClient::new(&config.openai, ApiKey::new(key)).unwrap();
    create_router(config, client).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn health(app: Router) -> HealthResponse {
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_with_key() {
    let report = health(router("sk-test-key")).await;
    assert_eq!(report.status, HealthStatus::Healthy);
    assert_eq!(report.checks["api_key"].status, "ok");
    assert!(report.checks["configuration"].message.contains("gpt-4o"));
}

#[tokio::test]
async fn test_health_degraded_without_key() {
    let report = health(router("")).await;
    assert_eq!(report.status, HealthStatus::Degraded);
    assert_eq!(report.checks["api_key"].status, "warning");
}

#[tokio::test]
async fn test_metrics_exposition() {
    let app = router("sk-test-key");

    // Touch the request counter through the analysis route
    let rejected = app.clone().oneshot(get("/api/analyze")).await.unwrap();
    assert_eq!(rejected.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("requests_total"));
    assert!(text.contains("status_code=\"405\""));
}

#[test]
fn test_invalid_analyze_path_is_rejected() {
    let mut config = AppConfig::default();
    config.server.analyze_path = "api/analyze".to_string();
    let client = OpenAiClient::new(&config.openai, ApiKey::new("sk-test-key")).unwrap();
    assert!(create_router(config, client).is_err());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = router("sk-test-key").oneshot(get("/v1/messages")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
