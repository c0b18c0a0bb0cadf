//! Axum-based HTTP server implementation for analyze-proxy.
//!
//! This module is responsible for setting up the HTTP server, configuring
//! routes, and running the analysis pipeline for incoming image uploads.
//!
//! # Components
//!
//! - `handlers`: The analysis endpoint plus health and metrics.
//! - `middleware`: Request ID tracking and optional CORS.
//! - `routes`: The main router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use handlers::{HealthCheck, HealthResponse, HealthStatus};
pub use routes::{create_router, AppState};
