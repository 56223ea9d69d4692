//! Per-client cooldown gate for the contact endpoint.
//!
//! One "last seen" timestamp per client key, not a token bucket: a key is
//! allowed at most one accepted request per cooldown window, and rejected
//! attempts never push the window out. A periodic sweep drops entries that
//! have gone quiet for longer than the retention threshold so the registry
//! stays bounded.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::time::{Duration, Instant};

// Rate limit entry - tracks the last accepted request per client key
pub struct RateLimitEntry {
    pub last_request_at: Instant,
}

/// Outcome of a rate-limit check. There is no error variant; the check is
/// total over its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Throttled,
}

/// In-memory key -> last-accepted-timestamp registry.
///
/// The caller passes the current `Instant` into every call, so the limiter
/// never reads the clock itself and tests can drive it with synthetic times.
#[derive(Default)]
pub struct RateLimiter {
    entries: DashMap<String, RateLimitEntry>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Check `client_key` against the cooldown and record `now` if the
    /// request is accepted.
    ///
    /// A key with no entry, or whose last accepted request is at least
    /// `cooldown` old, is `Allowed` and its timestamp becomes `now`. Anything
    /// inside the cooldown is `Throttled` and the stored timestamp stays
    /// untouched, anchoring the window to the last *accepted* request.
    ///
    /// The lookup and the conditional store happen under the map's entry
    /// guard, so two racing calls for the same key cannot both be allowed.
    pub fn check_and_record(&self, client_key: &str, now: Instant, cooldown: Duration) -> Decision {
        match self.entries.entry(client_key.to_string()) {
            Entry::Occupied(mut entry) => {
                if now.duration_since(entry.get().last_request_at) >= cooldown {
                    entry.get_mut().last_request_at = now;
                    Decision::Allowed
                } else {
                    Decision::Throttled
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(RateLimitEntry {
                    last_request_at: now,
                });
                Decision::Allowed
            }
        }
    }

    /// Drop every entry strictly older than `retention`.
    ///
    /// Housekeeping only: an entry inside the retention window is kept even
    /// when it is already outside the cooldown, so retention must be
    /// configured at least as long as the cooldown. Called opportunistically
    /// before each check rather than on a timer.
    pub fn sweep(&self, now: Instant, retention: Duration) {
        self.entries
            .retain(|_, entry| now.duration_since(entry.last_request_at) <= retention);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
