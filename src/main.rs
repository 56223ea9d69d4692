use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use seafront_api::build_router;
use seafront_api::config::Args;
use seafront_api::i18n::{Catalogs, Locale};
use seafront_api::state::AppState;

// this is main async function with tokio
#[tokio::main]
async fn main() {
    // parse cli arguments
    let args = Args::parse();

    // creating shared state
    let state = Arc::new(AppState::new(
        Catalogs::builtin(),
        Duration::from_secs(args.cooldown_secs),
        Duration::from_secs(args.retention_secs),
    ));

    let app = build_router(state.clone());

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    println!("Seafront API running on http://localhost:{}", args.port);
    let codes: Vec<&str> = Locale::all().iter().map(|l| l.code()).collect();
    println!(
        "Locales: {} (default {})",
        codes.join(", "),
        Locale::default()
    );
    println!(
        "Contact cooldown: {}s, entry retention: {}s",
        state.cooldown.as_secs(),
        state.retention.as_secs()
    );
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
