//! Configuration data structures for analyze-proxy.
//!
//! This module defines the schema for the application settings, including
//! server parameters, the upstream OpenAI connection, the image guard and
//! logging. The OpenAI API key is deliberately absent: it is read from the
//! process environment at startup and handed to the client directly.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port, routing, body limits).
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream OpenAI API settings.
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Inbound image checks applied before the upstream call.
    #[serde(default)]
    pub vision: VisionConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `127.0.0.1`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `8080`
    #[serde(default = "default_port")]
    pub port: u16,

    /// Route the analysis handler is mounted on.
    /// Default: `/api/analyze`
    #[serde(default = "default_analyze_path")]
    pub analyze_path: String,

    /// Maximum accepted request body in bytes.
    /// Default: `52428800` (50MB)
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Attach a permissive CORS layer for browser frontends on another origin.
    /// Default: `false`
    #[serde(default)]
    pub cors_permissive: bool,
}

/// Settings for the upstream chat-completion connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// Base URL of the OpenAI-compatible API, without the endpoint path.
    /// Default: `https://api.openai.com/v1`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Multimodal model used for every analysis.
    /// Default: `gpt-4o`
    #[serde(default = "default_model")]
    pub model: String,

    /// Output token ceiling sent as `max_tokens`.
    /// Default: `1000`
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Overall request timeout in seconds. `0` leaves the call unbounded.
    /// Default: `0`
    #[serde(default)]
    pub timeout_seconds: u64,

    /// TCP connect timeout in seconds.
    /// Default: `10`
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Settings for the inbound image guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionConfig {
    /// Largest decoded image accepted, in bytes.
    /// Default: `20971520` (20MB)
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,

    /// Decode the payload and require a recognised image signature.
    /// Default: `false`
    #[serde(default)]
    pub strict_validation: bool,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`, `compact`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Whether to mask API keys and bearer tokens in logged upstream bodies.
    /// Default: `true`
    #[serde(default = "default_true")]
    pub sanitize_tokens: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            analyze_path: default_analyze_path(),
            max_body_bytes: default_max_body_bytes(),
            cors_permissive: false,
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_seconds: 0,
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: default_max_image_bytes(),
            strict_validation: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            sanitize_tokens: true,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_analyze_path() -> String {
    "/api/analyze".to_string()
}

fn default_max_body_bytes() -> usize {
    // 20MB JPEG is ~27MB of base64 plus JSON framing
    50 * 1024 * 1024
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_max_image_bytes() -> usize {
    20 * 1024 * 1024
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
