use std::time::Duration;

use crate::i18n::Catalogs;
use crate::rate_limit::RateLimiter;

// app's shared state
pub struct AppState {
    pub limiter: RateLimiter,
    pub catalogs: Catalogs,
    pub cooldown: Duration,  // min gap between accepted submissions per client
    pub retention: Duration, // how long an idle limiter entry is kept
}

impl AppState {
    /// Build the shared state with a fresh limiter registry.
    ///
    /// A retention below the cooldown is lifted to the cooldown; a sweep
    /// inside the cooldown window would otherwise forget a fresh entry and
    /// re-open the gate early.
    pub fn new(catalogs: Catalogs, cooldown: Duration, retention: Duration) -> AppState {
        if retention < cooldown {
            println!(
                "[state] retention {}s is shorter than the cooldown, using {}s",
                retention.as_secs(),
                cooldown.as_secs()
            );
        }
        AppState {
            limiter: RateLimiter::new(),
            catalogs,
            cooldown,
            retention: retention.max(cooldown),
        }
    }
}
