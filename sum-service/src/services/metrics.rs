//! Metrics collection for sum-service.

use crate::models::Transport;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use service_core::error::AppError;
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SumOutcome {
    Computed,
    Rejected,
}

impl SumOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SumOutcome::Computed => "computed",
            SumOutcome::Rejected => "rejected",
        }
    }
}

/// Install the global Prometheus recorder. Call once, from `main`.
pub fn init_metrics() -> Result<(), AppError> {
    let handle = PrometheusBuilder::new().install_recorder().map_err(|e| {
        AppError::InternalError(anyhow::anyhow!(
            "Failed to install Prometheus recorder: {}",
            e
        ))
    })?;

    METRICS_HANDLE.set(handle).map_err(|_| {
        AppError::InternalError(anyhow::anyhow!("Metrics recorder already initialized"))
    })
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

pub fn record_sum(transport: Transport, outcome: SumOutcome) {
    metrics::counter!(
        "sum_requests_total",
        "transport" => transport.as_str(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
}
