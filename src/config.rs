use crate::infrastructure::http::router::DEFAULT_MAX_BODY_BYTES;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub seed_sample_data: bool,
    pub max_body_bytes: usize,
    pub otel_exporter_endpoint: Option<String>,
    pub service_name: String,
    pub metrics_enabled: bool,
    pub metrics_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        // PORT is honoured for hosting platforms that only set that one
        let server_port = lookup("SERVER_PORT")
            .or_else(|| lookup("PORT"))
            .unwrap_or_else(|| "5000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let seed_sample_data = match lookup("SEED_SAMPLE_DATA") {
            Some(v) => parse_bool(&v).ok_or(ConfigError::InvalidFlag("SEED_SAMPLE_DATA"))?,
            None => true,
        };

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(v) => v.parse().map_err(|_| ConfigError::InvalidBodyLimit)?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        let otel_exporter_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|e| !e.is_empty());

        let service_name = lookup("SERVICE_NAME").unwrap_or_else(|| "deskline".to_string());

        let metrics_enabled = match lookup("METRICS_ENABLED") {
            Some(v) => parse_bool(&v).ok_or(ConfigError::InvalidFlag("METRICS_ENABLED"))?,
            None => true,
        };

        let metrics_port = lookup("METRICS_PORT")
            .unwrap_or_else(|| "9000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidMetricsPort)?;

        Ok(Config {
            server_host,
            server_port,
            seed_sample_data,
            max_body_bytes,
            otel_exporter_endpoint,
            service_name,
            metrics_enabled,
            metrics_port,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid metrics port number")]
    InvalidMetricsPort,

    #[error("Invalid MAX_BODY_BYTES value")]
    InvalidBodyLimit,

    #[error("{0} must be a boolean")]
    InvalidFlag(&'static str),
}
