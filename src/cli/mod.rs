// CLI module for analyze-proxy
// Author: kelexine (https://github.com/kelexine)

use crate::config::AppConfig;
use clap::Parser;
use std::path::PathBuf;

/// analyze-proxy - Image analysis proxy for multimodal chat completions
#[derive(Parser, Debug)]
#[command(name = "analyze-proxy", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file (default: ~/.analyze-proxy/config.toml)
    #[arg(short, long, env = "ANALYZE_PROXY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Bind address, overrides the config file
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port, overrides the config file
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Args {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
