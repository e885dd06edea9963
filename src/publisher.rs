//! # Publish capability consumed by the emitter.
//!
//! [`Publish`] is the single external collaborator: a transport that accepts a
//! named channel and an opaque payload and delivers it. Its protocol and
//! delivery guarantees are out of scope for this crate — NATS, MQTT, an
//! in-process bus, or a test recorder all fit behind the same trait.
//!
//! ## Contract
//! - `publish` returns `Ok(())` on accepted delivery; there is **no**
//!   acknowledgment beyond that.
//! - On failure it returns a [`PublishError`], which the emitter propagates
//!   unchanged to its caller. The emitter never retries, queues, or buffers.
//!
//! ## Example (skeleton)
//! ```rust
//! use async_trait::async_trait;
//! use pulsekit::{Publish, PublishError};
//!
//! struct NoopTransport;
//!
//! #[async_trait]
//! impl Publish for NoopTransport {
//!     async fn publish(&self, _channel: &[u8], _payload: &[u8]) -> Result<(), PublishError> {
//!         Ok(())
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::error::PublishError;

/// Contract for publish transports.
///
/// Both `channel` and `payload` are opaque byte sequences; the transport must
/// not interpret them beyond routing on the channel name.
#[async_trait]
pub trait Publish: Send + Sync + 'static {
    /// Delivers `payload` to the named `channel`.
    ///
    /// # Errors
    /// Returns an implementation-defined [`PublishError`] on delivery failure.
    async fn publish(&self, channel: &[u8], payload: &[u8]) -> Result<(), PublishError>;
}

/// Simple stdout publisher.
///
/// Enabled via the `logging` feature. Prints human-readable publish lines for
/// debugging and demonstration purposes:
/// ```text
/// [publish] channel=heartbeat.worker-1 payload=start/60
/// [publish] channel=heartbeat.worker-1 payload=beat/5
/// ```
///
/// Not intended for production use - wire a real transport behind [`Publish`].
#[cfg(feature = "logging")]
pub struct LogPublisher;

#[cfg(feature = "logging")]
#[async_trait]
impl Publish for LogPublisher {
    async fn publish(&self, channel: &[u8], payload: &[u8]) -> Result<(), PublishError> {
        println!(
            "[publish] channel={} payload={}",
            String::from_utf8_lossy(channel),
            String::from_utf8_lossy(payload),
        );
        Ok(())
    }
}
