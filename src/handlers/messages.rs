use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::i18n::Locale;
use crate::metrics::REQUEST_TOTAL;
use crate::state::AppState;

// GET /{locale}/api/messages
//
// Serves a locale's copy with gaps already patched from the default
// catalog. Echoes the resolved locale so a client can tell when an
// unsupported prefix fell back to the default.
pub async fn messages_handler(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
) -> impl IntoResponse {
    REQUEST_TOTAL.inc();
    let locale = Locale::resolve(Some(&locale));
    Json(serde_json::json!({
        "locale": locale.code(),
        "messages": state.catalogs.merged(locale),
    }))
}
