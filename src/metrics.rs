//! Prometheus metrics of the gateway itself, served on `/metrics`.

use crate::{Result, RopeeErr};
use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::registry::Registry;

pub const METRICS_CONTENT_TYPE: &str = "application/openmetrics-text; version=1.0.0; charset=utf-8";

/// Request counters. Incremented once per accepted request, that is once the
/// body decoded, whatever the backend answers.
pub struct Metrics {
    registry: Registry,

    /// Counter of accepted remote write requests.
    pub write_requests: Counter,

    /// Counter of accepted remote read requests.
    pub read_requests: Counter,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let write_requests = Counter::default();
        registry.register(
            "ropee_write_requests",
            "Remote write requests accepted by the gateway",
            write_requests.clone(),
        );

        let read_requests = Counter::default();
        registry.register(
            "ropee_read_requests",
            "Remote read requests accepted by the gateway",
            read_requests.clone(),
        );

        Self {
            registry,
            write_requests,
            read_requests,
        }
    }

    /// Render the OpenMetrics text exposition.
    pub fn encode(&self) -> Result<String> {
        let mut buffer = String::new();
        encode(&mut buffer, &self.registry).map_err(|e| RopeeErr::InternalErr(e.to_string()))?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod test {
    use crate::metrics::Metrics;
    use crate::Result;

    #[test]
    fn test_encode_counters() -> Result<()> {
        let metrics = Metrics::new();
        metrics.write_requests.inc();
        metrics.write_requests.inc();
        metrics.read_requests.inc();

        let text = metrics.encode()?;
        assert!(text.contains("ropee_write_requests_total 2"));
        assert!(text.contains("ropee_read_requests_total 1"));
        assert!(text.ends_with("# EOF\n"));
        Ok(())
    }
}
