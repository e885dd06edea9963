//! Error types surfaced by publish transports.
//!
//! This module defines a single error enum:
//!
//! - [`PublishError`] — raised by a [`Publish`](crate::Publish) implementation
//!   when delivery fails.
//!
//! The emitter itself never constructs, catches, or wraps these errors: a
//! failed publish propagates unchanged to the caller, which decides whether a
//! missed heartbeat is fatal to the process. The type provides helper methods
//! (`as_label`, `as_message`) for logging/metrics on the caller side.

use thiserror::Error;

/// # Errors produced by a publish transport.
///
/// The emitter treats these as opaque: no retry, no backoff, no buffering.
/// Whatever the transport raises surfaces directly from the corresponding
/// [`Emitter`](crate::Emitter) operation.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum PublishError {
    /// Delivery to the channel failed.
    #[error("delivery failed: {error}")]
    Delivery {
        /// The underlying transport error message.
        error: String,
    },

    /// The transport is closed and will not accept further messages.
    #[error("transport closed")]
    Closed,
}

impl PublishError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use pulsekit::PublishError;
    ///
    /// let err = PublishError::Delivery { error: "broken pipe".into() };
    /// assert_eq!(err.as_label(), "publish_delivery_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            PublishError::Delivery { .. } => "publish_delivery_failed",
            PublishError::Closed => "publish_transport_closed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            PublishError::Delivery { error } => format!("delivery failed: {error}"),
            PublishError::Closed => "transport closed".to_string(),
        }
    }
}
