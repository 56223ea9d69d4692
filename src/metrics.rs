use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("seafront_requests_total", "Total number of API requests").unwrap();
    pub static ref CONTACT_ACCEPTED: Counter = register_counter!(
        "seafront_contact_accepted_total",
        "Contact submissions accepted"
    )
    .unwrap();
    pub static ref CONTACT_THROTTLED: Counter = register_counter!(
        "seafront_contact_throttled_total",
        "Contact submissions rejected by the cooldown gate"
    )
    .unwrap();
    pub static ref CONTACT_INVALID: Counter = register_counter!(
        "seafront_contact_invalid_total",
        "Contact submissions rejected by validation"
    )
    .unwrap();
    pub static ref TRANSLATION_FALLBACKS: Counter = register_counter!(
        "seafront_translation_fallbacks_total",
        "Lookups served from the default catalog instead of the requested locale"
    )
    .unwrap();
    pub static ref TRANSLATION_MISSES: Counter = register_counter!(
        "seafront_translation_misses_total",
        "Lookups that fell through to the raw key"
    )
    .unwrap();
    pub static ref RATE_ENTRIES: Gauge = register_gauge!(
        "seafront_rate_limit_entries",
        "Current number of tracked client keys"
    )
    .unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "seafront_request_latency_seconds",
        "Request latency in seconds"
    )
    .unwrap();
}
