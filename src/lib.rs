//! Backend for the Seafront Hotel marketing site: the localized message
//! catalogs behind every page plus the rate-limited contact endpoint.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

pub mod config;
pub mod handlers;
pub mod i18n;
pub mod metrics;
pub mod models;
pub mod rate_limit;
pub mod state;

use handlers::{contact_handler, health_handler, messages_handler, metrics_handler};
use state::AppState;

// creating the router with routes - shared with the integration tests so
// they drive exactly what production serves
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/{locale}/api/contact", post(contact_handler))
        .route("/{locale}/api/messages", get(messages_handler))
        .with_state(state)
}
