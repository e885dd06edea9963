//! # Injectable monotonic time source.
//!
//! Throttling decisions compare "now" against the last emission per signal
//! kind. [`Clock`] abstracts where "now" comes from so tests can simulate
//! elapsed time deterministically instead of sleeping in real time.
//!
//! - [`MonotonicClock`] — production clock backed by [`Instant::now`].
//! - [`ManualClock`] — test clock advanced explicitly via [`ManualClock::advance`].
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use pulsekit::{Clock, ManualClock};
//!
//! let clock = ManualClock::new();
//! let t0 = clock.now();
//! clock.advance(Duration::from_secs(3));
//! assert_eq!(clock.now() - t0, Duration::from_secs(3));
//! ```

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Contract for monotonic time sources.
///
/// Implementations must be monotonic: successive `now()` calls never go
/// backwards. Wall-clock sources are unsuitable (they jump on NTP steps).
pub trait Clock: Send + Sync + 'static {
    /// Returns the current monotonic instant.
    fn now(&self) -> Instant;
}

/// Production clock backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Deterministic clock for tests.
///
/// Holds a fixed base instant plus an explicit offset; [`ManualClock::advance`]
/// moves time forward without sleeping. Shipped publicly so downstream crates
/// can test their own heartbeat wiring against simulated time.
#[derive(Debug)]
pub struct ManualClock {
    base: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    /// Creates a clock frozen at the current instant.
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    /// Advances the clock by `delta`. Never moves time backwards.
    pub fn advance(&self, delta: Duration) {
        let mut offset = match self.offset.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *offset += delta;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let offset = match self.offset.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        };
        self.base + offset
    }
}
