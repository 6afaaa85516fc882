use std::sync::OnceLock;

use prometheus::{HistogramOpts, HistogramVec, IntCounter, Registry};

/// Registers the server metrics, safe to call more than once
pub fn setup() {
    static SETUP: OnceLock<()> = OnceLock::new();

    SETUP.get_or_init(|| {
        let registry = registry();

        if let Err(error) = registry.register(Box::new(incoming_requests_counter().clone())) {
            tracing::warn!("Failed registering request counter: {error}");
        }

        if let Err(error) = registry.register(Box::new(response_time_hist().clone())) {
            tracing::warn!("Failed registering response time histogram: {error}");
        }
    });
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();

    REGISTRY.get_or_init(Registry::new)
}

fn incoming_requests_counter() -> &'static IntCounter {
    static INCOMING_REQUESTS: OnceLock<IntCounter> = OnceLock::new();

    INCOMING_REQUESTS.get_or_init(|| {
        IntCounter::new("incoming_requests", "Incoming Requests").expect("valid metric definition")
    })
}

fn response_time_hist() -> &'static HistogramVec {
    static RESPONSE_TIME_COLLECTOR: OnceLock<HistogramVec> = OnceLock::new();

    RESPONSE_TIME_COLLECTOR.get_or_init(|| {
        HistogramVec::new(
            HistogramOpts::new("response_time", "Response Times"),
            &["path"],
        )
        .expect("valid metric definition")
    })
}

pub(crate) fn track_request_count_and_time(path: &str, response_time: f64) {
    incoming_requests_counter().inc();

    response_time_hist()
        .with_label_values(&[path])
        .observe(response_time);
}

pub(crate) fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = prometheus::TextEncoder::new();
    let mut metrics = String::new();

    encoder.encode_utf8(&registry().gather(), &mut metrics)?;
    encoder.encode_utf8(&prometheus::gather(), &mut metrics)?;

    Ok(metrics)
}
