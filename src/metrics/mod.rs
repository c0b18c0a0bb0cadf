// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{
    gather_metrics,
    REQUESTS_TOTAL,
    REQUEST_DURATION,
    UPSTREAM_CALLS,
    UPSTREAM_DURATION,
};

/// Helper to record inbound request metrics
pub fn record_request(status_code: u16, duration_secs: f64) {
    let status = status_code.to_string();
    REQUESTS_TOTAL.with_label_values(&[&status]).inc();
    REQUEST_DURATION
        .with_label_values(&[&status])
        .observe(duration_secs);
}

/// Helper to record OpenAI API call metrics
pub fn record_upstream_call(model: &str, status: &str, duration_secs: f64) {
    UPSTREAM_CALLS.with_label_values(&[model, status]).inc();
    UPSTREAM_DURATION
        .with_label_values(&[model])
        .observe(duration_secs);
}
