//! Prometheus metrics for the booking push service.
//!
//! - Dispatch outcomes by event type
//! - Token lookup results
//! - Transport send latency

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter_vec, Encoder, Histogram, IntCounterVec, TextEncoder,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "booking_push";

lazy_static! {
    /// Dispatch attempts by event type and outcome
    pub static ref DISPATCHES_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_dispatches_total", METRIC_PREFIX),
        "Dispatch attempts by event type and outcome",
        &["event", "outcome"]
    ).unwrap();

    /// Token lookups by result
    pub static ref TOKEN_LOOKUPS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_token_lookups_total", METRIC_PREFIX),
        "Token lookups by result",
        &["result"]
    ).unwrap();

    /// Transport send duration in seconds
    pub static ref SEND_DURATION_SECONDS: Histogram = register_histogram!(
        format!("{}_send_duration_seconds", METRIC_PREFIX),
        "Push transport send duration in seconds",
        vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    ).unwrap();
}

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording dispatch metrics
pub struct DispatchMetrics;

impl DispatchMetrics {
    pub fn record_delivered(event: &str) {
        DISPATCHES_TOTAL.with_label_values(&[event, "delivered"]).inc();
    }

    pub fn record_invalid(event: &str) {
        DISPATCHES_TOTAL.with_label_values(&[event, "invalid"]).inc();
    }

    pub fn record_no_token(event: &str) {
        DISPATCHES_TOTAL.with_label_values(&[event, "no_token"]).inc();
    }

    pub fn record_lookup_error(event: &str) {
        DISPATCHES_TOTAL
            .with_label_values(&[event, "lookup_error"])
            .inc();
    }

    pub fn record_send_error(event: &str) {
        DISPATCHES_TOTAL
            .with_label_values(&[event, "send_error"])
            .inc();
    }
}

/// Helper struct for recording token lookup metrics
pub struct TokenMetrics;

impl TokenMetrics {
    pub fn record_hit() {
        TOKEN_LOOKUPS_TOTAL.with_label_values(&["hit"]).inc();
    }

    pub fn record_miss() {
        TOKEN_LOOKUPS_TOTAL.with_label_values(&["miss"]).inc();
    }

    pub fn record_error() {
        TOKEN_LOOKUPS_TOTAL.with_label_values(&["error"]).inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_metrics() {
        DispatchMetrics::record_delivered("booking_created");
        let text = encode_metrics().unwrap();
        assert!(text.contains("booking_push_dispatches_total"));
    }
}
