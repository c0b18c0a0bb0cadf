// Error handling tests
// Author: kelexine (https://github.com/kelexine)

use analyze_proxy::error::ProxyError;
use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{json, Value};

async fn render(error: ProxyError) -> (StatusCode, Vec<u8>) {
    let response = error.into_response();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[test]
fn test_error_display_messages() {
    let errors = vec![
        ProxyError::MethodNotAllowed,
        ProxyError::MissingImage,
        ProxyError::InvalidImage("bad base64".to_string()),
        ProxyError::ImageTooLarge("too big".to_string()),
        ProxyError::Upstream { status: 500, details: "oops".to_string() },
        ProxyError::Config("bad path".to_string()),
        ProxyError::Internal("boom".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[tokio::test]
async fn test_method_not_allowed_is_plain_text() {
    let (status, body) = render(ProxyError::MethodNotAllowed).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, b"Method Not Allowed");
}

#[tokio::test]
async fn test_missing_image_envelope_has_no_details() {
    let (status, body) = render(ProxyError::MissingImage).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, br#"{"error":"No image data received."}"#);
}

#[tokio::test]
async fn test_upstream_status_is_preserved() {
    let error = ProxyError::Upstream {
        status: 503,
        details: "upstream connect error".to_string(),
    };
    assert_eq!(error.to_string(), "OpenAI Error: 503");

    let (status, body) = render(error).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        body,
        json!({ "error": "OpenAI Error: 503", "details": "upstream connect error" })
    );
}

#[tokio::test]
async fn test_unexpected_failures_collapse_to_500() {
    let json_error = serde_json::from_str::<Value>("{").unwrap_err();
    let expected_details = json_error.to_string();

    let (status, body) = render(ProxyError::Json(json_error)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "Server processing failed");
    assert_eq!(body["details"], expected_details);

    let (status, _) = render(ProxyError::Internal("boom".to_string())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_image_guard_statuses() {
    let (status, body) = render(ProxyError::ImageTooLarge("Image size 30 bytes exceeds maximum of 20 bytes".to_string())).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "Image too large.");
    assert!(body["details"].as_str().unwrap().contains("exceeds maximum"));

    let (status, _) = render(ProxyError::InvalidImage("bad".to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
