//! # Emitter configuration.
//!
//! Provides [`EmitterConfig`], the per-emitter settings fixed at construction.
//!
//! ## Field semantics
//! - `max_frequency`: Minimum interval between two emissions of the **same**
//!   throttled signal kind (`beat`, `degraded`). `start` and `stop` ignore it.
//! - `stop_grace`: Post-publish delay appended to `stop()` before it returns,
//!   giving the transport a chance to flush the final message before process
//!   exit. Best-effort, not a confirmed-delivery barrier.

use std::time::Duration;

/// Configuration for an [`Emitter`](crate::Emitter).
///
/// Defines:
/// - **Throttling**: minimum interval between same-kind emissions
/// - **Shutdown behavior**: grace delay after the final `stop` publish
///
/// ## Notes
/// All fields are public for flexibility; construct via `Default` and override
/// what you need.
#[derive(Clone, Copy, Debug)]
pub struct EmitterConfig {
    /// Minimum interval between two emissions of the same throttled kind.
    ///
    /// A throttled call is eligible when the elapsed time since that kind's
    /// last emission is **greater than or equal to** this interval (the exact
    /// boundary counts as eligible). The two throttled kinds are tracked
    /// independently.
    pub max_frequency: Duration,

    /// Delay awaited after publishing `stop`, before `stop()` returns.
    ///
    /// Increases the likelihood that the transport flushes the message before
    /// the process exits. `Duration::ZERO` disables the delay.
    pub stop_grace: Duration,
}

impl Default for EmitterConfig {
    /// Default configuration:
    ///
    /// - `max_frequency = 1s` (at most one beat and one degraded per second)
    /// - `stop_grace = 100ms` (brief flush window on shutdown)
    fn default() -> Self {
        Self {
            max_frequency: Duration::from_secs(1),
            stop_grace: Duration::from_millis(100),
        }
    }
}
