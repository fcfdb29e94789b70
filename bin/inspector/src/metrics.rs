//! Prometheus metrics for the inspector.

use crate::{ContractKind, EventRecord};
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use std::time::Duration;

/// Handle for recording inspector metrics.
///
/// Descriptions are registered with the global recorder on creation.
#[derive(Debug, Clone)]
pub struct Metrics {
    _private: (),
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self::register_descriptions();
        Self { _private: () }
    }

    fn register_descriptions() {
        describe_counter!(
            "inspector_events_total",
            "Decoded events by contract and event name"
        );
        describe_counter!(
            "inspector_watch_failures_total",
            "Event watches that ended with an error, by contract and event name"
        );
        describe_gauge!(
            "inspector_active_watches",
            "Number of running event watches"
        );
        describe_histogram!(
            "inspector_scan_duration_seconds",
            "Duration of a historical event scan in seconds"
        );
    }

    /// Record a decoded event.
    pub fn record_event(&self, record: &EventRecord) {
        counter!(
            "inspector_events_total",
            "contract" => record.contract.as_str(),
            "event" => record.event
        )
        .increment(1);
    }

    /// Record a watch that ended with an error.
    pub fn record_watch_failure(&self, contract: ContractKind, event: &'static str) {
        counter!(
            "inspector_watch_failures_total",
            "contract" => contract.as_str(),
            "event" => event
        )
        .increment(1);
    }

    pub fn set_active_watches(&self, count: usize) {
        gauge!("inspector_active_watches").set(count as f64);
    }

    /// Record a completed historical scan.
    pub fn record_scan(&self, contract: ContractKind, duration: Duration) {
        histogram!(
            "inspector_scan_duration_seconds",
            "contract" => contract.as_str()
        )
        .record(duration.as_secs_f64());
    }
}

/// Install the Prometheus exporter and serve it on `port`.
pub fn install_prometheus_exporter(port: u16) -> eyre::Result<()> {
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::net::SocketAddr;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| eyre::eyre!("Failed to install Prometheus exporter: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_without_recorder() {
        // No global recorder is installed in tests; recording is a no-op.
        let metrics = Metrics::new();
        metrics.record_event(&EventRecord {
            contract: ContractKind::Executor,
            event: "AccountCreated",
            block_number: Some(1),
            log_index: Some(0),
            transaction_hash: None,
            details: String::new(),
        });
        metrics.record_watch_failure(ContractKind::Governor, "HookApproved");
        metrics.set_active_watches(3);
        metrics.record_scan(ContractKind::Executor, Duration::from_millis(5));
    }
}
