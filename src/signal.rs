//! # Lifecycle signals and their wire encoding.
//!
//! The [`Signal`] enum classifies the four lifecycle announcements a process
//! can make:
//! - **Unthrottled signals**: [`Signal::Start`] and [`Signal::Stop`] — emitted
//!   on every call.
//! - **Throttled signals**: [`Signal::Beat`] and [`Signal::Degraded`] — at
//!   most one emission per throttle window, tracked independently per kind.
//!
//! ## Wire format
//! Every signal is rendered as an ASCII payload; the destination channel is
//! derived from the process identifier:
//! ```text
//! channel  = "heartbeat." + <process>
//! payloads = "start/<warmup>" | "beat/<period>" | "degraded/<period>" | "stop"
//! ```
//! `<warmup>` and `<period>` are base-10 seconds, no sign, no leading zeros.
//! Both channel and payload are opaque byte sequences to the transport.
//!
//! ## Example
//! ```rust
//! use pulsekit::Signal;
//!
//! let sig = Signal::Beat { period: 5 };
//! assert_eq!(sig.payload(), b"beat/5");
//! assert_eq!(sig.as_label(), "beat");
//! assert_eq!(Signal::channel("my.process"), b"heartbeat.my.process");
//! ```

/// Channel name prefix shared by all emitters.
const CHANNEL_PREFIX: &str = "heartbeat.";

/// A lifecycle announcement, parameterized by its payload fields.
///
/// Durations (`warmup`, `period`) are whole seconds, rendered into the payload
/// as base-10 integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Process is starting; consumers should expect no beats for `warmup` seconds.
    Start {
        /// Warmup window in seconds (may be 0).
        warmup: u32,
    },

    /// Process is alive and healthy; next beat expected within `period` seconds.
    Beat {
        /// Announced beat period in seconds.
        period: u32,
    },

    /// Process is alive but impaired; next signal expected within `period` seconds.
    Degraded {
        /// Announced signal period in seconds.
        period: u32,
    },

    /// Process is shutting down.
    Stop,
}

impl Signal {
    /// Renders the ASCII payload bytes for this signal.
    pub fn payload(&self) -> Vec<u8> {
        match self {
            Signal::Start { warmup } => format!("start/{warmup}").into_bytes(),
            Signal::Beat { period } => format!("beat/{period}").into_bytes(),
            Signal::Degraded { period } => format!("degraded/{period}").into_bytes(),
            Signal::Stop => b"stop".to_vec(),
        }
    }

    /// Derives the channel name bytes for a process identifier.
    ///
    /// The identifier is opaque; it is concatenated verbatim after the
    /// `heartbeat.` prefix.
    pub fn channel(process: &str) -> Vec<u8> {
        let mut out = Vec::with_capacity(CHANNEL_PREFIX.len() + process.len());
        out.extend_from_slice(CHANNEL_PREFIX.as_bytes());
        out.extend_from_slice(process.as_bytes());
        out
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            Signal::Start { .. } => "start",
            Signal::Beat { .. } => "beat",
            Signal::Degraded { .. } => "degraded",
            Signal::Stop => "stop",
        }
    }

    /// Indicates whether this signal kind is subject to throttling.
    ///
    /// Returns `true` for [`Signal::Beat`] and [`Signal::Degraded`],
    /// `false` otherwise.
    pub fn is_throttled(&self) -> bool {
        matches!(self, Signal::Beat { .. } | Signal::Degraded { .. })
    }
}
