use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use prometheus::Encoder;

use crate::metrics::REGISTRY;

pub async fn metrics_handler() -> Response {
    let mut res = encode(&REGISTRY.gather());
    res.push_str(&encode(&prometheus::gather()));

    (StatusCode::OK, res).into_response()
}

fn encode(metric_families: &[prometheus::proto::MetricFamily]) -> String {
    let encoder = prometheus::TextEncoder::new();

    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(metric_families, &mut buffer) {
        log::error!("Could not encode metrics: {}", e);
    };
    match String::from_utf8(buffer) {
        Ok(v) => v,
        Err(e) => {
            log::error!("Metrics could not be from_utf8'd: {}", e);
            String::default()
        }
    }
}
