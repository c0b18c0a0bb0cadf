// analyze-proxy - Image analysis proxy for multimodal chat completions
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod openai;
pub mod server;
pub mod translation;
pub mod utils;
pub mod vision;
