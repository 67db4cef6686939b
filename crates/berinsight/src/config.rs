// berinsight/crates/berinsight/src/config.rs

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub api_host: String,
    pub api_port: u16,
    pub request_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            warn!("Failed to load .env file: {}. Using system environment variables.", e);
        } else {
            info!("Loaded environment variables from .env file");
        }

        let data_path = PathBuf::from(
            env::var("DATA_PATH").unwrap_or_else(|_| "/data/insights.json".into()),
        );

        Ok(Self {
            data_path,
            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            api_port: env::var("API_PORT").unwrap_or_else(|_| "8000".into()).parse()?,
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "30".into())
                .parse()?,
        })
    }

    pub fn print_config(&self) {
        info!("Data path: {}", self.data_path.display());
        info!("API listen address: {}:{}", self.api_host, self.api_port);
        info!("Request timeout: {}s", self.request_timeout_seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to create a test Config with default values
    fn create_test_config() -> Config {
        Config {
            data_path: PathBuf::from("/data/insights.json"),
            api_host: "0.0.0.0".to_string(),
            api_port: 8000,
            request_timeout_seconds: 30,
        }
    }

    #[test]
    fn test_config_creation_with_default_values() {
        let config = create_test_config();

        assert_eq!(config.data_path, PathBuf::from("/data/insights.json"));
        assert_eq!(config.api_host, "0.0.0.0");
        assert_eq!(config.api_port, 8000);
        assert_eq!(config.request_timeout_seconds, 30);
    }

    #[test]
    fn test_config_is_cloneable() {
        let config = create_test_config();
        let cloned = config.clone();
        assert_eq!(cloned.api_port, config.api_port);
        assert_eq!(cloned.data_path, config.data_path);
    }
}
