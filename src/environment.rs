// src/environment.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::client::DEFAULT_TIMEOUT_SECS;

const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub api_base_url: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: EnvironmentConfig,
    production: EnvironmentConfig,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl EnvironmentConfig {
    /// Load configuration based on environment. A `config.yaml` in the
    /// working directory wins when present; otherwise the REPHUB_API_URL
    /// environment variable, then a localhost default.
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();

        let config_path = Path::new("config.yaml");
        if config_path.exists() {
            info!("Loading config.yaml for environment: {}", environment);
            return Self::load_from_file(config_path, &environment);
        }

        let api_base_url =
            std::env::var("REPHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Self {
            api_base_url,
            request_timeout_secs: default_timeout(),
        })
    }

    fn get_environment() -> String {
        std::env::var("REPHUB_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(path: &Path, environment: &str) -> Result<Self> {
        let config_content = std::fs::read_to_string(path).context("Failed to read config.yaml")?;

        let config_file: ConfigFile =
            serde_yaml::from_str(&config_content).context("Failed to parse config.yaml")?;

        Ok(Self::select(config_file, environment))
    }

    fn select(config_file: ConfigFile, environment: &str) -> Self {
        match environment {
            "production" => config_file.production,
            _ => config_file.local,
        }
    }
}
