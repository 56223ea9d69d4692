use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use seafront_api::build_router;
use seafront_api::i18n::Catalogs;
use seafront_api::state::AppState;

pub fn test_router(cooldown: Duration, retention: Duration) -> Router {
    build_router(Arc::new(AppState::new(
        Catalogs::builtin(),
        cooldown,
        retention,
    )))
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}
