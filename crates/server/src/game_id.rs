//! Game identifiers: millisecond-timestamp IDs, kept strictly increasing so
//! two games created in the same millisecond never share a key.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// Key of one game in the store. A positive decimal integer, safe to embed
/// in a URL query string.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct GameId(i64);

impl GameId {
    /// Parse a client-supplied identifier. Anything that is not a positive
    /// decimal integer is treated as no identifier at all.
    pub fn parse(raw: &str) -> Option<GameId> {
        raw.trim().parse().ok().filter(|id| *id > 0).map(GameId)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out game IDs based on the wall clock, bumped past the previous ID
/// whenever the clock has not advanced.
pub struct GameIdGenerator {
    last: AtomicI64,
}

impl GameIdGenerator {
    pub fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    pub fn next_id(&self) -> GameId {
        let now = chrono::Utc::now().timestamp_millis();
        loop {
            let last = self.last.load(Ordering::Acquire);
            let candidate = now.max(last + 1);
            if self
                .last
                .compare_exchange(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
                .is_ok()
            {
                return GameId(candidate);
            }
        }
    }
}

impl Default for GameIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
