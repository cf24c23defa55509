use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static RECORDS_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("lava_rapido_records_created_total", "Service records created")
        .expect("register records_created_total")
});

pub static RECORDS_REJECTED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "lava_rapido_records_rejected_total",
        "Record creations rejected by catalog or field validation"
    )
    .expect("register records_rejected_total")
});

pub static RECORD_LISTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("lava_rapido_record_lists_total", "Record list requests served")
        .expect("register record_lists_total")
});

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}"));
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

pub async fn metrics_handler() -> (StatusCode, String) {
    // counters only show up in the registry once initialized
    Lazy::force(&RECORDS_CREATED_TOTAL);
    Lazy::force(&RECORDS_REJECTED_TOTAL);
    Lazy::force(&RECORD_LISTS_TOTAL);
    encode_metrics()
}
