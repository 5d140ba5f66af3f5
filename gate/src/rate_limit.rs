//! Evaluation rate limiter.
//!
//! At most one accepted evaluation per (instrument, entry timeframe, side)
//! within the configured cool-down. The store is an explicit value injected
//! into the gate's constructor — created empty at process start, never
//! persisted, never shared outside the gate.
//!
//! Check-then-set happens under one sync mutex hold so two near-simultaneous
//! evaluations of the same key cannot both pass. A std mutex (not tokio) is
//! deliberate: no await may interleave the check and the update.

use std::collections::HashMap;
use std::sync::Mutex;

use market::timeframe::Timeframe;
use market::types::Instrument;

use crate::signal::OptionSide;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RateKey {
    pub instrument: Instrument,
    pub timeframe: Timeframe,
    pub side: OptionSide,
}

#[derive(Debug)]
pub struct RateLimiter {
    cooldown_ms: u64,
    last_accepted: Mutex<HashMap<RateKey, u64>>,
}

impl RateLimiter {
    pub fn new(cooldown_ms: u64) -> Self {
        Self {
            cooldown_ms,
            last_accepted: Mutex::new(HashMap::new()),
        }
    }

    /// Accept or reject one evaluation attempt at `now_ms`.
    ///
    /// Acceptance stamps the key immediately; rejection leaves the stored
    /// timestamp untouched, so hammering a rate-limited key does not extend
    /// its cool-down. Returns the remaining cool-down on rejection.
    pub fn try_acquire(&self, key: RateKey, now_ms: u64) -> Result<(), u64> {
        let mut map = self.last_accepted.lock().expect("rate limiter mutex poisoned");

        if let Some(&last) = map.get(&key) {
            let elapsed = now_ms.saturating_sub(last);
            if elapsed < self.cooldown_ms {
                return Err(self.cooldown_ms - elapsed);
            }
        }

        map.insert(key, now_ms);
        Ok(())
    }
}
