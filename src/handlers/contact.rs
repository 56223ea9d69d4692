use axum::{
    Json,
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::i18n::Locale;
use crate::metrics::{
    CONTACT_ACCEPTED, CONTACT_INVALID, CONTACT_THROTTLED, RATE_ENTRIES, REQUEST_LATENCY,
    REQUEST_TOTAL,
};
use crate::models::{ContactForm, ContactResponse, submission_reference};
use crate::rate_limit::Decision;
use crate::state::AppState;

// POST /{locale}/api/contact
//
// The cooldown gate runs before anything looks at the payload: a throttled
// client gets a localized 429 and the form is not processed further.
pub async fn contact_handler(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(form): Json<ContactForm>,
) -> Response {
    REQUEST_TOTAL.inc();
    let now = Instant::now();

    let locale = Locale::resolve(Some(&locale));
    let client = client_key(&headers, addr);

    // opportunistic housekeeping before the check; no background timer
    state.limiter.sweep(now, state.retention);
    RATE_ENTRIES.set(state.limiter.len() as f64);

    if state.limiter.check_and_record(&client, now, state.cooldown) == Decision::Throttled {
        CONTACT_THROTTLED.inc();
        println!("[contact] throttled {}", client);
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(serde_json::json!({
                "error": state.catalogs.translate(locale, "contact.form.throttled")
            })),
        )
            .into_response();
    }

    if let Err(violation) = form.validate() {
        CONTACT_INVALID.inc();
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({
                "error": state.catalogs.translate(locale, violation)
            })),
        )
            .into_response();
    }

    let received_at = chrono::Utc::now();
    let reference = submission_reference(form.email.trim(), &received_at);
    CONTACT_ACCEPTED.inc();
    println!("[contact] message {} accepted from {}", reference, client);
    if form.newsletter {
        println!("[contact] {} opted into the newsletter", reference);
    }

    let ack_key = if form.newsletter {
        "contact.form.receivedNewsletter"
    } else {
        "contact.form.received"
    };
    let response = ContactResponse {
        reference,
        message: state.catalogs.translate(locale, ack_key).to_string(),
        newsletter: form.newsletter,
    };

    REQUEST_LATENCY.observe(now.elapsed().as_secs_f64());
    (StatusCode::OK, Json(response)).into_response()
}

// Caller identity for the cooldown gate: first forwarded hop, then the
// reverse proxy's x-real-ip, then the socket address itself
fn client_key(headers: &HeaderMap, addr: SocketAddr) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }
    if let Some(real_ip) = headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
        let real_ip = real_ip.trim();
        if !real_ip.is_empty() {
            return real_ip.to_string();
        }
    }
    addr.ip().to_string()
}
