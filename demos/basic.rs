//! # Example: basic
//!
//! Minimal lifecycle round-trip with the built-in stdout publisher.
//!
//! Demonstrates how to:
//! - Construct an [`Emitter`] with a process identifier and a [`Publish`] impl.
//! - Walk the full lifecycle: `start` → `beat` → `degraded` → `stop`.
//!
//! ## Flow
//! ```text
//! Emitter::new("demo.worker", LogPublisher, defaults)
//!     ├─► start(60)     ─► publish "start/60"
//!     ├─► beat(5)       ─► publish "beat/5"
//!     ├─► degraded(5)   ─► publish "degraded/5"
//!     └─► stop()        ─► publish "stop", await 100ms grace, exit
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example basic --features logging
//! ```

use std::sync::Arc;

use pulsekit::{Emitter, EmitterConfig, LogPublisher, PublishError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), PublishError> {
    // 1. Default config: max_frequency = 1s, stop_grace = 100ms
    let cfg = EmitterConfig::default();

    // 2. Stdout transport for demonstration
    let mut heart = Emitter::new("demo.worker", Arc::new(LogPublisher), cfg);

    // 3. Announce the lifecycle
    heart.start(60).await?;
    heart.beat(5).await?;
    heart.degraded(5).await?;
    heart.stop().await?;

    Ok(())
}
