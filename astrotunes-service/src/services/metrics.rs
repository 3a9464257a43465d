//! Metrics collection for astrotunes-service.
//!
//! HTTP request metrics recorded by the shared middleware are rendered through
//! the Prometheus recorder; composition counters live in a local registry.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
pub static PROMETHEUS_REGISTRY: OnceLock<Registry> = OnceLock::new();
pub static COMPOSITIONS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize metrics collection.
///
/// Installs the process-wide recorder, so it must run at most once.
pub fn init_metrics() -> anyhow::Result<()> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    if METRICS_HANDLE.set(handle).is_err() {
        anyhow::bail!("metrics handle already initialized");
    }

    let registry = Registry::new();

    let compositions = IntCounterVec::new(
        Opts::new(
            "astrotunes_compositions_total",
            "Total music compositions by endpoint and outcome",
        ),
        &["endpoint", "outcome"],
    )?;

    registry.register(Box::new(compositions.clone()))?;

    let _ = PROMETHEUS_REGISTRY.set(registry);
    let _ = COMPOSITIONS_TOTAL.set(compositions);

    Ok(())
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    let mut output = METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string());

    if let Some(registry) = PROMETHEUS_REGISTRY.get() {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&registry.gather(), &mut buffer).ok();
        if let Ok(custom_metrics) = String::from_utf8(buffer) {
            output.push_str(&custom_metrics);
        }
    }

    output
}

/// Count one composition attempt.
pub fn record_composition(endpoint: &str, outcome: &str) {
    if let Some(counter) = COMPOSITIONS_TOTAL.get() {
        counter.with_label_values(&[endpoint, outcome]).inc();
    }
}
