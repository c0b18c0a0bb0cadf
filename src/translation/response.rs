// Response translation (OpenAI chat completion → caller)
// Author: kelexine (https://github.com/kelexine)

use crate::error::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::de::IgnoredAny;

/// Relay a successful upstream body to the caller unchanged.
///
/// The body must be well-formed JSON; its structure is not inspected.
pub fn passthrough_response(body: Bytes) -> Result<Response> {
    serde_json::from_slice::<IgnoredAny>(&body)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProxyError;

    #[tokio::test]
    async fn test_body_is_relayed_byte_for_byte() {
        let raw = Bytes::from_static(br#"{"id":"chatcmpl-1",  "choices":[{"index":0}]}"#);
        let response = passthrough_response(raw.clone()).unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, raw);
    }

    #[test]
    fn test_non_json_body_is_rejected() {
        let result = passthrough_response(Bytes::from_static(b"<html>bad gateway</html>"));
        assert!(matches!(result, Err(ProxyError::Json(_))));
    }
}
