//! # pulsekit
//!
//! **Pulsekit** is a small liveness-signaling library for Rust.
//!
//! A process announces its lifecycle state (starting, healthy, degraded,
//! stopping) to a named channel over an injected publish transport, while
//! rate-limiting how often each throttled signal kind is actually emitted.
//! The crate is designed as a building block: the transport (NATS, MQTT, an
//! in-process bus, ...) lives behind a single-method trait and is entirely the
//! caller's choice.
//!
//! ## Architecture
//! ```text
//!   caller
//!     │  start(warmup) / beat(period) / degraded(period) / stop()
//!     ▼
//! ┌───────────────────────────────────────────────┐
//! │  Emitter                                      │
//! │  - channel = "heartbeat." + process           │
//! │  - last_beat / last_degraded (independent)    │
//! │  - Clock (injectable monotonic time)          │
//! └──────────────────────┬────────────────────────┘
//!                        │ publish(channel, payload)
//!                        ▼
//!             ┌─────────────────────┐
//!             │  Publish transport  │  (injected, out of scope)
//!             └─────────────────────┘
//! ```
//!
//! ### Emission rules
//! ```text
//! start(warmup)    ──► always publish  "start/<warmup>"
//! stop()           ──► always publish  "stop", then await stop_grace
//! beat(period)     ──► publish "beat/<period>"      iff elapsed(last_beat)     >= max_frequency
//! degraded(period) ──► publish "degraded/<period>"  iff elapsed(last_degraded) >= max_frequency
//! ```
//! The two throttle timers never interact; suppressed calls are no-ops.
//! Transport errors propagate unchanged — no retry, no queueing, no buffering.
//!
//! ## Features
//! | Area           | Description                                            | Key types / traits               |
//! |----------------|--------------------------------------------------------|----------------------------------|
//! | **Emitter**    | Per-kind throttled lifecycle announcements.            | [`Emitter`], [`EmitterConfig`]   |
//! | **Transport**  | Pluggable publish capability.                          | [`Publish`]                      |
//! | **Signals**    | Typed signals and their wire encoding.                 | [`Signal`]                       |
//! | **Time**       | Injectable monotonic clock for deterministic tests.    | [`Clock`], [`ManualClock`]       |
//! | **Errors**     | Opaque transport failure, propagated unchanged.        | [`PublishError`]                 |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogPublisher`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use pulsekit::{Emitter, EmitterConfig, Publish, PublishError};
//!
//! struct Stdout;
//!
//! #[async_trait]
//! impl Publish for Stdout {
//!     async fn publish(&self, channel: &[u8], payload: &[u8]) -> Result<(), PublishError> {
//!         println!(
//!             "{} -> {}",
//!             String::from_utf8_lossy(payload),
//!             String::from_utf8_lossy(channel),
//!         );
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), PublishError> {
//!     let mut heart = Emitter::new(
//!         "my.process.identifier",
//!         Arc::new(Stdout),
//!         EmitterConfig::default(),
//!     );
//!
//!     heart.start(60).await?;    // start/60 -> heartbeat.my.process.identifier
//!     heart.beat(5).await?;      // beat/5   -> heartbeat.my.process.identifier
//!     heart.beat(5).await?;      // suppressed: within the 1s window
//!     heart.degraded(5).await?;  // degraded/5 (independent throttle)
//!     heart.stop().await?;       // stop, then ~100ms grace before returning
//!     Ok(())
//! }
//! ```
mod clock;
mod config;
mod emitter;
mod error;
mod publisher;
mod signal;

// ---- Public re-exports ----

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::EmitterConfig;
pub use emitter::Emitter;
pub use error::PublishError;
pub use publisher::Publish;
pub use signal::Signal;

// Optional: expose a simple built-in stdout publisher (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use publisher::LogPublisher;
