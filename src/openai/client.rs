// OpenAI chat-completions client
// Author: kelexine (https://github.com/kelexine)

use super::ApiKey;
use crate::config::OpenAiConfig;
use crate::error::{ProxyError, Result};
use crate::metrics;
use crate::models::openai::ChatCompletionRequest;
use crate::utils::logging::sanitize;
use bytes::Bytes;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Client for the OpenAI chat-completions endpoint.
///
/// Holds a pooled HTTP client and the server-side API key. One call to
/// [`OpenAiClient::chat_completion`] is exactly one upstream request: no
/// retries, no caching.
pub struct OpenAiClient {
    http_client: Client,
    config: OpenAiConfig,
    api_key: ApiKey,
    sanitize_logs: bool,
}

impl OpenAiClient {
    /// Create a new client with connection pooling.
    ///
    /// No overall timeout is set unless `timeout_seconds` is non-zero.
    pub fn new(config: &OpenAiConfig, api_key: ApiKey) -> Result<Self> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .tcp_nodelay(true)
            .use_rustls_tls();

        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
        }

        let http_client = builder
            .build()
            .map_err(|e| ProxyError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created HTTP client for {}", config.base_url);

        Ok(Self {
            http_client,
            config: config.clone(),
            api_key,
            sanitize_logs: true,
        })
    }

    /// Toggle redaction of secrets in logged upstream error bodies.
    pub fn with_sanitized_logs(mut self, enabled: bool) -> Self {
        self.sanitize_logs = enabled;
        self
    }

    /// Get the configured model
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Get the API base_url
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Whether a non-blank API key was supplied at startup
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Call `POST /chat/completions`.
    ///
    /// Returns the raw success body. A non-2xx reply becomes
    /// [`ProxyError::Upstream`] carrying the upstream status and error text.
    pub async fn chat_completion(&self, request: &ChatCompletionRequest) -> Result<Bytes> {
        let url = self.completions_url();
        debug!("Calling chat completions API for model: {}", request.model);

        let start = Instant::now();
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.api_key.expose())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("OpenAI request failed: {}", e);
                metrics::record_upstream_call(&request.model, "error", start.elapsed().as_secs_f64());
                ProxyError::Http(e)
            })?;

        let status = response.status();
        metrics::record_upstream_call(&request.model, status.as_str(), start.elapsed().as_secs_f64());

        if !status.is_success() {
            let error_text = response.text().await?;
            let logged = if self.sanitize_logs {
                sanitize(&error_text)
            } else {
                error_text.clone()
            };
            error!("OpenAI API error: HTTP {} - Response body: {}", status, logged);

            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                details: error_text,
            });
        }

        let body = response.bytes().await?;
        debug!("Received OpenAI response ({} bytes) in {:?}", body.len(), start.elapsed());
        Ok(body)
    }
}
