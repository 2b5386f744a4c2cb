use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct SumConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub service_name: String,
    pub log_level: String,
    /// OTLP gRPC collector. Spans are only logged when unset.
    pub otlp_endpoint: Option<String>,
}

impl Default for SumConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            service_name: "sum-service".to_string(),
            log_level: "info".to_string(),
            otlp_endpoint: None,
        }
    }
}

impl SumConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let defaults = Self::default();

        Ok(SumConfig {
            common,
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            otlp_endpoint: non_empty(env::var("OTLP_ENDPOINT").ok()),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
