// Error types for analyze-proxy
// Author: kelexine (https://github.com/kelexine)

use crate::models::analyze::ErrorEnvelope;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("No image data received.")]
    MissingImage,

    #[error("Invalid image data: {0}")]
    InvalidImage(String),

    #[error("Image too large: {0}")]
    ImageTooLarge(String),

    #[error("OpenAI Error: {status}")]
    Upstream { status: u16, details: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProxyError {
    /// HTTP status the caller receives for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ProxyError::MissingImage | ProxyError::InvalidImage(_) => StatusCode::BAD_REQUEST,
            ProxyError::ImageTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            // Out-of-range codes can't be produced by reqwest, but don't trust it
            ProxyError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message for the `details` field, without the variant prefix.
    fn details(&self) -> Option<String> {
        match self {
            ProxyError::MethodNotAllowed | ProxyError::MissingImage => None,
            ProxyError::InvalidImage(msg)
            | ProxyError::ImageTooLarge(msg)
            | ProxyError::Config(msg)
            | ProxyError::Internal(msg) => Some(msg.clone()),
            ProxyError::Upstream { details, .. } => Some(details.clone()),
            ProxyError::Json(e) => Some(e.to_string()),
            ProxyError::Http(e) => Some(e.to_string()),
            ProxyError::ConfigParsing(e) => Some(e.to_string()),
        }
    }

    /// JSON body sent to the caller. `None` for the plain-text 405.
    pub fn envelope(&self) -> Option<ErrorEnvelope> {
        let error = match self {
            ProxyError::MethodNotAllowed => return None,
            ProxyError::MissingImage => self.to_string(),
            ProxyError::InvalidImage(_) => "Invalid image data.".to_string(),
            ProxyError::ImageTooLarge(_) => "Image too large.".to_string(),
            ProxyError::Upstream { .. } => self.to_string(),
            _ => "Server processing failed".to_string(),
        };

        Some(ErrorEnvelope {
            error,
            details: self.details(),
        })
    }
}

// Convert ProxyError to HTTP responses for Axum
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self.envelope() {
            Some(body) => (status, axum::Json(body)).into_response(),
            None => (status, self.to_string()).into_response(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;
