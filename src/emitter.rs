//! # The signal emitter.
//!
//! [`Emitter`] decides, per call, whether a lifecycle signal is emitted, and
//! formats/delivers it through the injected [`Publish`] transport.
//!
//! ## Throttling
//! `beat` and `degraded` each keep their own last-emission timestamp; a call
//! is eligible when the elapsed time since that kind's last emission is `>=`
//! [`EmitterConfig::max_frequency`] (the exact boundary counts as eligible).
//! The two timers never interact: interleaving both kinds within one window
//! suppresses neither kind's first call. `start` and `stop` are never
//! throttled.
//!
//! An ineligible call returns `Ok(())` with no observable effect, so rapid
//! repeated calls within the window are idempotent.
//!
//! ## Failure semantics
//! The emitter performs no error handling of its own: a [`PublishError`] from
//! the transport propagates unchanged, and there is no retry, queueing, or
//! buffering. The throttle timestamp is advanced at the moment of the emit
//! decision, so a failed publish still consumes the window and future
//! throttling stays consistent.
//!
//! ## Ordering
//! There is no state machine over the four operations: calling `stop` before
//! `start` is permitted and simply emits `stop`.

use std::sync::Arc;
use std::time::Instant;

use crate::clock::{Clock, MonotonicClock};
use crate::config::EmitterConfig;
use crate::error::PublishError;
use crate::publisher::Publish;
use crate::signal::Signal;

/// # Lifecycle-signal emitter for a single process.
///
/// Constructed once per process with a fixed identifier, transport, and
/// configuration. The channel name is derived at construction as
/// `"heartbeat." + process` and never changes.
///
/// Operations take `&mut self`: the throttle timestamps are private mutable
/// state, and exclusive access makes the elapsed-time check race-free. Callers
/// that need to share one emitter across tasks wrap it in their own lock.
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use async_trait::async_trait;
/// use pulsekit::{Emitter, EmitterConfig, Publish, PublishError};
///
/// struct Noop;
///
/// #[async_trait]
/// impl Publish for Noop {
///     async fn publish(&self, _c: &[u8], _p: &[u8]) -> Result<(), PublishError> {
///         Ok(())
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), PublishError> {
/// let mut heart = Emitter::new("worker-1", Arc::new(Noop), EmitterConfig::default());
/// heart.start(60).await?;   // publishes b"start/60"
/// heart.beat(5).await?;     // publishes b"beat/5"
/// heart.beat(5).await?;     // within the window: no publish
/// heart.stop().await?;      // publishes b"stop", then waits stop_grace
/// # Ok(())
/// # }
/// ```
pub struct Emitter {
    process: String,
    channel: Vec<u8>,
    publisher: Arc<dyn Publish>,
    clock: Arc<dyn Clock>,
    config: EmitterConfig,
    last_beat: Option<Instant>,
    last_degraded: Option<Instant>,
}

impl Emitter {
    /// Creates an emitter for `process`, publishing through `publisher`.
    ///
    /// The channel name is fixed here as `"heartbeat." + process`. Time comes
    /// from [`MonotonicClock`]; use [`Emitter::with_clock`] to inject another
    /// source (e.g. [`ManualClock`](crate::ManualClock) in tests).
    pub fn new(
        process: impl Into<String>,
        publisher: Arc<dyn Publish>,
        config: EmitterConfig,
    ) -> Self {
        let process = process.into();
        Self {
            channel: Signal::channel(&process),
            process,
            publisher,
            clock: Arc::new(MonotonicClock),
            config,
            last_beat: None,
            last_degraded: None,
        }
    }

    /// Replaces the time source. Intended for tests and simulations.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the process identifier this emitter announces for.
    pub fn process(&self) -> &str {
        &self.process
    }

    /// Returns the derived channel name bytes (`"heartbeat." + process`).
    pub fn channel(&self) -> &[u8] {
        &self.channel
    }

    /// Announces that the process is starting.
    ///
    /// Always publishes `b"start/<warmup>"` — never throttled. `warmup` tells
    /// consumers how many seconds to wait before expecting the first beat.
    ///
    /// # Errors
    /// Propagates the transport's [`PublishError`] unchanged.
    pub async fn start(&mut self, warmup: u32) -> Result<(), PublishError> {
        self.emit(Signal::Start { warmup }).await
    }

    /// Announces that the process is alive and healthy.
    ///
    /// Throttled: publishes `b"beat/<period>"` only when at least
    /// [`EmitterConfig::max_frequency`] has elapsed since the last beat
    /// emission; otherwise returns `Ok(())` without side effect. Independent
    /// of the `degraded` timer.
    ///
    /// # Errors
    /// Propagates the transport's [`PublishError`] unchanged. A failed publish
    /// still consumes the throttle window.
    pub async fn beat(&mut self, period: u32) -> Result<(), PublishError> {
        let now = self.clock.now();
        if !Self::eligible(self.last_beat, now, &self.config) {
            return Ok(());
        }
        self.last_beat = Some(now);
        self.emit(Signal::Beat { period }).await
    }

    /// Announces that the process is alive but impaired.
    ///
    /// Same throttling as [`Emitter::beat`], against its own independent
    /// timer; publishes `b"degraded/<period>"` when eligible.
    ///
    /// # Errors
    /// Propagates the transport's [`PublishError`] unchanged. A failed publish
    /// still consumes the throttle window.
    pub async fn degraded(&mut self, period: u32) -> Result<(), PublishError> {
        let now = self.clock.now();
        if !Self::eligible(self.last_degraded, now, &self.config) {
            return Ok(());
        }
        self.last_degraded = Some(now);
        self.emit(Signal::Degraded { period }).await
    }

    /// Announces that the process is shutting down.
    ///
    /// Always publishes `b"stop"` — never throttled — then awaits
    /// [`EmitterConfig::stop_grace`] before returning, giving the transport a
    /// chance to flush the final message. The delay is a best-effort grace
    /// period, not a delivery confirmation; it is skipped entirely when the
    /// publish fails.
    ///
    /// # Errors
    /// Propagates the transport's [`PublishError`] unchanged.
    pub async fn stop(&mut self) -> Result<(), PublishError> {
        self.emit(Signal::Stop).await?;
        if self.config.stop_grace > std::time::Duration::ZERO {
            tokio::time::sleep(self.config.stop_grace).await;
        }
        Ok(())
    }

    /// Eligibility check for throttled kinds.
    ///
    /// `None` (never emitted) is always eligible. The boundary is inclusive:
    /// `elapsed == max_frequency` emits.
    fn eligible(last: Option<Instant>, now: Instant, config: &EmitterConfig) -> bool {
        match last {
            None => true,
            Some(at) => now.saturating_duration_since(at) >= config.max_frequency,
        }
    }

    async fn emit(&self, signal: Signal) -> Result<(), PublishError> {
        self.publisher.publish(&self.channel, &signal.payload()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    use crate::clock::ManualClock;

    /// Records every publish as a (channel, payload) pair.
    struct Recorder {
        published: Mutex<Vec<(Vec<u8>, Vec<u8>)>>,
    }

    impl Recorder {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                published: Mutex::new(Vec::new()),
            })
        }

        fn take(&self) -> Vec<(Vec<u8>, Vec<u8>)> {
            std::mem::take(&mut self.published.lock().unwrap())
        }

        fn payloads(&self) -> Vec<Vec<u8>> {
            self.published
                .lock()
                .unwrap()
                .iter()
                .map(|(_, p)| p.clone())
                .collect()
        }
    }

    #[async_trait]
    impl Publish for Recorder {
        async fn publish(&self, channel: &[u8], payload: &[u8]) -> Result<(), PublishError> {
            self.published
                .lock()
                .unwrap()
                .push((channel.to_vec(), payload.to_vec()));
            Ok(())
        }
    }

    /// Fails every publish with a delivery error.
    struct Failing;

    #[async_trait]
    impl Publish for Failing {
        async fn publish(&self, _channel: &[u8], _payload: &[u8]) -> Result<(), PublishError> {
            Err(PublishError::Delivery {
                error: "connection refused".into(),
            })
        }
    }

    fn emitter_with(
        process: &str,
        publisher: Arc<dyn Publish>,
        clock: Arc<ManualClock>,
    ) -> Emitter {
        Emitter::new(process, publisher, EmitterConfig::default()).with_clock(clock)
    }

    #[tokio::test]
    async fn test_start_always_publishes() {
        let rec = Recorder::new();
        let clock = Arc::new(ManualClock::new());
        let mut emitter = emitter_with("my.process.identifier", rec.clone(), clock);

        emitter.start(60).await.unwrap();
        emitter.start(60).await.unwrap();

        let published = rec.take();
        assert_eq!(published.len(), 2, "start is never throttled");
        assert_eq!(published[0].0, b"heartbeat.my.process.identifier");
        assert_eq!(published[0].1, b"start/60");
    }

    #[tokio::test]
    async fn test_beat_throttles_within_window() {
        let rec = Recorder::new();
        let clock = Arc::new(ManualClock::new());
        let mut emitter = emitter_with("p", rec.clone(), clock.clone());

        emitter.beat(5).await.unwrap();
        clock.advance(Duration::from_millis(500));
        emitter.beat(5).await.unwrap();
        clock.advance(Duration::from_millis(499));
        emitter.beat(5).await.unwrap();

        assert_eq!(rec.payloads(), vec![b"beat/5".to_vec()]);
    }

    #[tokio::test]
    async fn test_beat_boundary_is_inclusive() {
        let rec = Recorder::new();
        let clock = Arc::new(ManualClock::new());
        let mut emitter = emitter_with("p", rec.clone(), clock.clone());

        emitter.beat(5).await.unwrap();
        clock.advance(Duration::from_secs(1));
        emitter.beat(5).await.unwrap();

        assert_eq!(
            rec.payloads().len(),
            2,
            "elapsed == max_frequency must be eligible"
        );
    }

    #[tokio::test]
    async fn test_beat_emits_once_per_window() {
        let rec = Recorder::new();
        let clock = Arc::new(ManualClock::new());
        let mut emitter = emitter_with("p", rec.clone(), clock.clone());

        // 40 calls spread over 4 windows, 100ms apart.
        for _ in 0..40 {
            emitter.beat(1).await.unwrap();
            clock.advance(Duration::from_millis(100));
        }

        assert_eq!(rec.payloads().len(), 4, "one emission per 1s window");
    }

    #[tokio::test]
    async fn test_beat_and_degraded_throttle_independently() {
        let rec = Recorder::new();
        let clock = Arc::new(ManualClock::new());
        let mut emitter = emitter_with("p", rec.clone(), clock.clone());

        emitter.beat(5).await.unwrap();
        emitter.degraded(5).await.unwrap();
        emitter.beat(5).await.unwrap();
        emitter.degraded(5).await.unwrap();

        assert_eq!(
            rec.payloads(),
            vec![b"beat/5".to_vec(), b"degraded/5".to_vec()],
            "each kind's first call in the window emits; repeats are suppressed"
        );

        clock.advance(Duration::from_secs(1));
        emitter.degraded(5).await.unwrap();
        emitter.beat(5).await.unwrap();

        assert_eq!(rec.payloads().len(), 4, "both kinds re-eligible after the window");
    }

    #[tokio::test]
    async fn test_stop_always_publishes() {
        let rec = Recorder::new();
        let clock = Arc::new(ManualClock::new());
        let mut emitter = Emitter::new(
            "p",
            rec.clone() as Arc<dyn Publish>,
            EmitterConfig {
                stop_grace: Duration::ZERO,
                ..EmitterConfig::default()
            },
        )
        .with_clock(clock);

        emitter.stop().await.unwrap();
        emitter.stop().await.unwrap();

        assert_eq!(rec.payloads(), vec![b"stop".to_vec(), b"stop".to_vec()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_returns_after_grace_delay() {
        let rec = Recorder::new();
        let mut emitter =
            Emitter::new("p", rec.clone() as Arc<dyn Publish>, EmitterConfig::default());

        let before = tokio::time::Instant::now();
        emitter.stop().await.unwrap();

        assert_eq!(rec.payloads(), vec![b"stop".to_vec()]);
        assert!(
            before.elapsed() >= Duration::from_millis(100),
            "stop must not return before the grace delay elapses"
        );
    }

    #[tokio::test]
    async fn test_out_of_order_lifecycle_is_permitted() {
        let rec = Recorder::new();
        let clock = Arc::new(ManualClock::new());
        let mut emitter = Emitter::new(
            "p",
            rec.clone() as Arc<dyn Publish>,
            EmitterConfig {
                stop_grace: Duration::ZERO,
                ..EmitterConfig::default()
            },
        )
        .with_clock(clock);

        // stop before start: no validation, simply emits.
        emitter.stop().await.unwrap();
        emitter.start(0).await.unwrap();

        assert_eq!(rec.payloads(), vec![b"stop".to_vec(), b"start/0".to_vec()]);
    }

    #[tokio::test]
    async fn test_publish_error_propagates_unchanged() {
        let clock = Arc::new(ManualClock::new());
        let mut emitter = emitter_with("p", Arc::new(Failing), clock);

        let err = emitter.start(10).await.unwrap_err();
        assert!(matches!(err, PublishError::Delivery { .. }));
        assert_eq!(err.as_label(), "publish_delivery_failed");

        let err = emitter.beat(1).await.unwrap_err();
        assert!(matches!(err, PublishError::Delivery { .. }));
    }

    #[tokio::test]
    async fn test_failed_beat_still_consumes_window() {
        let clock = Arc::new(ManualClock::new());
        let mut emitter = emitter_with("p", Arc::new(Failing), clock.clone());

        assert!(emitter.beat(1).await.is_err());
        // Window consumed at decision time: the next call inside it is a no-op.
        assert!(emitter.beat(1).await.is_ok());

        clock.advance(Duration::from_secs(1));
        assert!(emitter.beat(1).await.is_err(), "re-eligible after the window");
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_lifecycle_scenario() {
        let rec = Recorder::new();
        let clock = Arc::new(ManualClock::new());
        let mut emitter = emitter_with("my.process.identifier", rec.clone(), clock.clone());

        emitter.start(60).await.unwrap();
        emitter.beat(5).await.unwrap();
        emitter.beat(5).await.unwrap(); // <1s later: suppressed
        emitter.degraded(5).await.unwrap();
        emitter.degraded(5).await.unwrap(); // <1s later: suppressed
        emitter.stop().await.unwrap();

        let published = rec.take();
        let channel: &[u8] = b"heartbeat.my.process.identifier";
        assert!(published.iter().all(|(c, _)| c == channel));
        assert_eq!(
            published.into_iter().map(|(_, p)| p).collect::<Vec<_>>(),
            vec![
                b"start/60".to_vec(),
                b"beat/5".to_vec(),
                b"degraded/5".to_vec(),
                b"stop".to_vec(),
            ]
        );
    }
}
