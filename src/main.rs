// analyze-proxy - Image analysis proxy for multimodal chat completions
// Author: kelexine (https://github.com/kelexine)

use analyze_proxy::cli::Args;
use analyze_proxy::config::AppConfig;
use analyze_proxy::openai::{ApiKey, OpenAiClient, API_KEY_ENV};
use analyze_proxy::server::create_router;
use analyze_proxy::utils::logging;
use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let mut config = AppConfig::load(args.config.as_deref())?;
    args.apply(&mut config);

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting analyze-proxy v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Load the upstream credential once; read-only from here on
    let api_key = ApiKey::from_env();
    if api_key.is_empty() {
        warn!("{} is not set; upstream calls will fail with 401", API_KEY_ENV);
    }

    let openai_client = OpenAiClient::new(&config.openai, api_key)?
        .with_sanitized_logs(config.logging.sanitize_tokens);
    info!(
        "Forwarding to {} with model {}",
        openai_client.base_url(),
        openai_client.model()
    );

    // Phase 4: Build and start HTTP server
    let addr: SocketAddr = config.bind_address().parse()?;
    let analyze_path = config.server.analyze_path.clone();
    let app = create_router(config, openai_client)?;

    info!("Starting server on {} (POST {})", addr, analyze_path);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 5: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
